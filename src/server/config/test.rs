use super::*;
use test_utils::fixture::config::{env_map, valid_env, CLIENT_ID, GUILD_ID, TOKEN};

/// Tests loading with every required value present and no `PORT`.
///
/// Expected: Ok with default port 3000
#[test]
fn loads_valid_env_with_default_port() {
    let config = Config::from_source(&valid_env()).unwrap();

    assert_eq!(config.discord_token, TOKEN);
    assert_eq!(config.application_id.get().to_string(), CLIENT_ID);
    assert_eq!(config.guild_id.get().to_string(), GUILD_ID);
    assert_eq!(config.port, 3000);
    assert_eq!(config.port, DEFAULT_PORT);
}

/// Tests that omitting each required value on its own is reported by name.
///
/// Expected: Err(ConfigError::Missing) naming exactly the omitted variable
#[test]
fn reports_each_missing_value_individually() {
    for key in ["DISCORD_TOKEN", "CLIENT_ID", "GUILD_ID"] {
        let mut env = valid_env();
        env.remove(key);

        let err = Config::from_source(&env).err().unwrap();

        assert_eq!(err.missing(), vec![key]);
    }
}

/// Tests that the report lists the status of every required variable.
///
/// Expected: three statuses in declaration order, only GUILD_ID missing
#[test]
fn missing_report_lists_every_field() {
    let mut env = valid_env();
    env.remove("GUILD_ID");

    let Err(ConfigError::Missing { fields }) = Config::from_source(&env) else {
        panic!("expected missing config error");
    };

    assert_eq!(
        fields,
        vec![
            FieldStatus::new("DISCORD_TOKEN", true),
            FieldStatus::new("CLIENT_ID", true),
            FieldStatus::new("GUILD_ID", false),
        ]
    );
    assert_eq!(fields[2].to_string(), "GUILD_ID: missing");
    assert_eq!(fields[0].to_string(), "DISCORD_TOKEN: present");
}

/// Tests an empty environment.
///
/// Expected: all three variables reported missing
#[test]
fn reports_all_missing_values() {
    let err = Config::from_source(&HashMap::<String, String>::new()).err().unwrap();

    assert_eq!(err.missing(), vec!["DISCORD_TOKEN", "CLIENT_ID", "GUILD_ID"]);
    assert_eq!(
        err.to_string(),
        "Missing required environment variable(s): DISCORD_TOKEN, CLIENT_ID, GUILD_ID"
    );
}

/// Tests that blank values are treated as absent.
///
/// Expected: Err(ConfigError::Missing) naming the blank variables
#[test]
fn treats_blank_values_as_missing() {
    let env = env_map(&[
        ("DISCORD_TOKEN", ""),
        ("CLIENT_ID", CLIENT_ID),
        ("GUILD_ID", "   "),
    ]);

    let err = Config::from_source(&env).err().unwrap();

    assert_eq!(err.missing(), vec!["DISCORD_TOKEN", "GUILD_ID"]);
}

/// Tests reading required values from their alias names.
///
/// Expected: Ok with values taken from TOKEN, APPLICATION_ID and DEPLOYMENT_ID
#[test]
fn falls_back_to_alias_names() {
    let env = env_map(&[
        ("TOKEN", "alias-token"),
        ("APPLICATION_ID", "42"),
        ("DEPLOYMENT_ID", "43"),
    ]);

    let config = Config::from_source(&env).unwrap();

    assert_eq!(config.discord_token, "alias-token");
    assert_eq!(config.application_id.get(), 42);
    assert_eq!(config.guild_id.get(), 43);
}

/// Tests that the primary name wins when both names are set.
///
/// Expected: Ok with the DISCORD_TOKEN value
#[test]
fn primary_name_takes_precedence_over_alias() {
    let mut env = valid_env();
    env.insert("TOKEN".to_string(), "alias-token".to_string());

    let config = Config::from_source(&env).unwrap();

    assert_eq!(config.discord_token, TOKEN);
}

/// Tests an explicit `PORT`.
///
/// Expected: Ok with the given port
#[test]
fn reads_explicit_port() {
    let mut env = valid_env();
    env.insert("PORT".to_string(), "7000".to_string());

    let config = Config::from_source(&env).unwrap();

    assert_eq!(config.port, 7000);
}

/// Tests a `PORT` that is not a usable fixed port.
///
/// Expected: Err(ConfigError::InvalidPort), including for zero
#[test]
fn rejects_invalid_port() {
    for value in ["http", "70000", "-1", "0"] {
        let mut env = valid_env();
        env.insert("PORT".to_string(), value.to_string());

        let result = Config::from_source(&env);

        assert!(
            matches!(result, Err(ConfigError::InvalidPort { .. })),
            "PORT={}",
            value
        );
    }
}

/// Tests identifiers that are not Discord snowflakes.
///
/// Expected: Err(ConfigError::InvalidId) naming the field
#[test]
fn rejects_invalid_ids() {
    let mut env = valid_env();
    env.insert("CLIENT_ID".to_string(), "not-a-number".to_string());
    assert!(matches!(
        Config::from_source(&env),
        Err(ConfigError::InvalidId { field: "CLIENT_ID", .. })
    ));

    let mut env = valid_env();
    env.insert("GUILD_ID".to_string(), "0".to_string());
    assert!(matches!(
        Config::from_source(&env),
        Err(ConfigError::InvalidId { field: "GUILD_ID", .. })
    ));
}
