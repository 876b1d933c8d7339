//! Unit tests for ID and calendar types

use super::time::parse_date;
use super::*;
use chrono::NaiveDate;
use std::str::FromStr;

#[cfg(test)]
mod league_id_tests {
    use super::*;

    #[test]
    fn test_league_id_display() {
        let id = LeagueId::new(98765);
        assert_eq!(id.to_string(), "98765");
    }

    #[test]
    fn test_league_id_from_str_valid() {
        let id = LeagueId::from_str(" 54321 ").unwrap();
        assert_eq!(id.as_u32(), 54321);
    }

    #[test]
    fn test_league_id_from_str_invalid() {
        assert!(LeagueId::from_str("not_a_number").is_err());
        assert!(LeagueId::from_str("-123").is_err());
    }

    #[test]
    fn test_league_id_default() {
        assert_eq!(LeagueId::default().as_u32(), 1947635809);
    }
}

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_season_default_and_parse() {
        assert_eq!(Season::default().as_u16(), 2025);
        assert_eq!(Season::from_str("2024").unwrap(), Season::new(2024));
        assert!(Season::from_str("twenty").is_err());
    }

    #[test]
    fn test_kickoff_date_2025() {
        // Labor Day 2025 is Monday Sept 1
        assert_eq!(
            Season::new(2025).kickoff_date(),
            NaiveDate::from_ymd_opt(2025, 9, 4)
        );
    }

    #[test]
    fn test_kickoff_date_2024() {
        assert_eq!(
            Season::new(2024).kickoff_date(),
            NaiveDate::from_ymd_opt(2024, 9, 5)
        );
    }

    #[test]
    fn test_kickoff_date_2023() {
        assert_eq!(
            Season::new(2023).kickoff_date(),
            NaiveDate::from_ymd_opt(2023, 9, 7)
        );
    }
}

#[cfg(test)]
mod week_tests {
    use super::*;

    #[test]
    fn test_week_default_and_max() {
        assert_eq!(Week::default().as_u16(), 1);
        assert_eq!(Week::MAX.as_u16(), 18);
        assert!(Week::new(3) < Week::MAX);
    }

    #[test]
    fn test_week_display() {
        assert_eq!(Week::new(7).to_string(), "7");
    }
}

#[cfg(test)]
mod date_tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("2025-09-04").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("09/04/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }
}
