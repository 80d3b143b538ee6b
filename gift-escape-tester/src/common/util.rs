use gift_escape_game::ConfigKey;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("--param {0:?} is not in key=value form")]
    MissingEquals(String),
    #[error("--param key {0:?} is not one of name, course, date, location, link, note")]
    UnknownKey(String),
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse repeated `--param key=value` flags into an override map. Later
/// flags replace earlier ones; the value may itself contain `=`.
pub fn parse_params<S: AsRef<str>>(raw: &[S]) -> Result<BTreeMap<String, String>, ParamError> {
    let mut overrides = BTreeMap::new();
    for item in raw {
        let item = item.as_ref();
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| ParamError::MissingEquals(item.to_string()))?;
        let key = key.trim();
        if ConfigKey::parse(key).is_none() {
            return Err(ParamError::UnknownKey(key.to_string()));
        }
        overrides.insert(key.to_string(), value.to_string());
    }
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,hints,  reload ");
        assert_eq!(parts, vec!["smoke", "hints", "reload"]);
    }

    #[test]
    fn params_accept_known_keys_and_keep_equals_in_values() {
        let parsed = parse_params(&["name=Sam", "link=https://x.test/?a=b", "name=Alex"])
            .expect("valid params");
        assert_eq!(parsed["name"], "Alex");
        assert_eq!(parsed["link"], "https://x.test/?a=b");
    }

    #[test]
    fn params_reject_malformed_and_unknown() {
        assert_eq!(
            parse_params(&["name"]),
            Err(ParamError::MissingEquals("name".to_string()))
        );
        assert_eq!(
            parse_params(&["colour=red"]),
            Err(ParamError::UnknownKey("colour".to_string()))
        );
    }
}
