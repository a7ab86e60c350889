//! Migration filename parsing.
//!
//! Recognized filenames have the shape `<version>_<label>.<up|down>.<ext>`:
//!
//! - `version` is one or more decimal digits (leading zeros allowed)
//! - `label` is any string, including empty, and may itself contain dots
//! - the direction segment and the extension are resolved from the right,
//!   so a dotted label never swallows them
//!
//! Anything else is not a migration filename. Parsing returns `None` rather
//! than an error: migration prefixes routinely coexist with unrelated
//! objects, and the catalog skips those.

use std::fmt;

/// Which half of a migration a file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Apply the schema change.
    Up,
    /// Revert the schema change.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One parsed migration half.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Migration {
    /// Ordering key extracted from the filename.
    pub version: u64,
    /// Human-readable label between the version and the direction segment.
    pub identifier: String,
    /// Which half this file holds.
    pub direction: Direction,
    /// The original filename, path-free. This, not the identifier, is the
    /// addressing key when the file is fetched back from the store.
    pub raw: String,
}

impl Migration {
    /// Parse a migration filename.
    ///
    /// Returns `None` for anything that does not match
    /// `<version>_<label>.<up|down>.<ext>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shale_catalog::{Direction, Migration};
    ///
    /// let m = Migration::parse("42_add_users.up.sql").unwrap();
    /// assert_eq!(m.version, 42);
    /// assert_eq!(m.identifier, "add_users");
    /// assert_eq!(m.direction, Direction::Up);
    ///
    /// assert!(Migration::parse("not-a-migration.txt").is_none());
    /// ```
    pub fn parse(filename: &str) -> Option<Migration> {
        let (digits, rest) = filename.split_once('_')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Out-of-range versions are unparsable, not fatal.
        let version: u64 = digits.parse().ok()?;

        // Resolve extension and direction from the right so dots in the
        // label stay part of the label.
        let (stem, _extension) = rest.rsplit_once('.')?;
        let (identifier, direction) = stem.rsplit_once('.')?;
        let direction = match direction {
            "up" => Direction::Up,
            "down" => Direction::Down,
            _ => return None,
        };

        Some(Migration {
            version,
            identifier: identifier.to_string(),
            direction,
            raw: filename.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parse_up() {
        let m = Migration::parse("1_foobar.up.sql").unwrap();
        assert_eq!(m.version, 1);
        assert_eq!(m.identifier, "foobar");
        assert_eq!(m.direction, Direction::Up);
        assert_eq!(m.raw, "1_foobar.up.sql");
    }

    #[test]
    fn parse_down() {
        let m = Migration::parse("1_foobar.down.sql").unwrap();
        assert_eq!(m.direction, Direction::Down);
    }

    #[test]
    fn parse_leading_zeros() {
        let m = Migration::parse("000042_init.up.sql").unwrap();
        assert_eq!(m.version, 42);
        assert_eq!(m.raw, "000042_init.up.sql");
    }

    #[test]
    fn parse_empty_label() {
        let m = Migration::parse("7_.up.sql").unwrap();
        assert_eq!(m.identifier, "");
        assert_eq!(m.version, 7);
    }

    #[test]
    fn parse_dotted_label() {
        let m = Migration::parse("3_users.v2.down.sql").unwrap();
        assert_eq!(m.identifier, "users.v2");
        assert_eq!(m.direction, Direction::Down);
    }

    #[test]
    fn parse_label_containing_underscore() {
        let m = Migration::parse("5_add_email_column.up.sql").unwrap();
        assert_eq!(m.identifier, "add_email_column");
    }

    #[test]
    fn parse_empty_extension() {
        let m = Migration::parse("1_x.up.").unwrap();
        assert_eq!(m.identifier, "x");
    }

    #[test]
    fn reject_non_migrations() {
        assert!(Migration::parse("").is_none());
        assert!(Migration::parse("not-a-migration.txt").is_none());
        assert!(Migration::parse("_missing_version.up.sql").is_none());
        assert!(Migration::parse("abc_letters.up.sql").is_none());
        assert!(Migration::parse("1x_mixed.up.sql").is_none());
        assert!(Migration::parse("1_sideways.left.sql").is_none());
        assert!(Migration::parse("1_no_direction.sql").is_none());
        assert!(Migration::parse("1_no_extension.up").is_none());
        assert!(Migration::parse("1-dash-not-underscore.up.sql").is_none());
    }

    #[test]
    fn reject_version_overflow() {
        assert!(Migration::parse("99999999999999999999999_big.up.sql").is_none());
    }

    #[test]
    fn direction_display() {
        assert_eq!(format!("{}", Direction::Up), "up");
        assert_eq!(format!("{}", Direction::Down), "down");
    }

    proptest! {
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = Migration::parse(&s);
        }

        #[test]
        fn accepted_filenames_keep_raw(
            version in 0u64..1_000_000,
            label in "[a-z_]{0,12}",
            ext in "[a-z]{1,4}",
        ) {
            let name = format!("{version}_{label}.up.{ext}");
            let m = Migration::parse(&name).unwrap();
            prop_assert_eq!(m.version, version);
            prop_assert_eq!(m.identifier, label);
            prop_assert_eq!(m.raw, name);
        }
    }
}
