//! Common serde helpers for legacy schema artifacts
//!
//! The upstream `emp_master` and `kbs_api_linkmaster` tables carry 'T'/'F'
//! text flags instead of booleans. Models keep genuine `bool` fields and
//! convert at the serialization boundary with these helpers; the repository
//! layer does the same for SQL binds via [`flag`] and [`is_true`].

/// Convert a bool into the legacy 'T'/'F' flag
pub fn flag(value: bool) -> &'static str {
    if value { "T" } else { "F" }
}

/// Interpret a legacy flag string ('T'/'t' is true, everything else false)
pub fn is_true(value: &str) -> bool {
    matches!(value, "T" | "t")
}

/// Serialize/deserialize a `bool` as the legacy "T"/"F" string
pub mod tf_flag {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &bool, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(super::flag(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "T" | "t" => Ok(true),
            "F" | "f" => Ok(false),
            other => Err(de::Error::custom(format!(
                "expected 'T' or 'F', got '{other}'"
            ))),
        }
    }
}

/// Serialize/deserialize an `Option<bool>` as an optional "T"/"F" string
pub mod tf_flag_opt {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<bool>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => s.serialize_str(super::flag(*v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => match raw.as_str() {
                "T" | "t" => Ok(Some(true)),
                "F" | "f" => Ok(Some(false)),
                other => Err(de::Error::custom(format!(
                    "expected 'T' or 'F', got '{other}'"
                ))),
            },
        }
    }
}
