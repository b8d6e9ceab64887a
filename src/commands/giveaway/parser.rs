use std::sync::LazyLock;

use regex::Regex;
use serenity::model::id::ChannelId;
use thiserror::Error as ThisError;

static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<#(\d+)>$").expect("the channel mention pattern is valid"));

#[derive(Debug, Clone, Copy, Eq, PartialEq, ThisError)]
pub enum ParseDurationError {
    #[error("the duration needs a unit out of (s|m|h|d)")]
    UnknownUnit,
    #[error("the duration magnitude must be an integer")]
    InvalidMagnitude,
}

/// Parses durations like `30s`, `5m`, `2h` or `1d` into seconds.
pub fn parse_duration(input: &str) -> Result<u64, ParseDurationError> {
    let unit = input
        .chars()
        .last()
        .ok_or(ParseDurationError::UnknownUnit)?;
    let seconds_per_unit: u64 = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 3600 * 24,
        _ => return Err(ParseDurationError::UnknownUnit),
    };

    let magnitude = input[..input.len() - unit.len_utf8()]
        .parse::<u64>()
        .map_err(|_| ParseDurationError::InvalidMagnitude)?;

    magnitude
        .checked_mul(seconds_per_unit)
        .ok_or(ParseDurationError::InvalidMagnitude)
}

/// Extracts the channel ID out of a raw `<#1234>` mention token.
pub fn parse_channel_mention(input: &str) -> Option<ChannelId> {
    let captures = CHANNEL_MENTION.captures(input.trim())?;
    let channel_id = captures[1].parse::<u64>().ok().filter(|id| *id != 0)?;

    Some(ChannelId::new(channel_id))
}

#[cfg(test)]
mod tests {
    use serenity::model::id::ChannelId;

    use crate::commands::giveaway::parser::{
        ParseDurationError, parse_channel_mention, parse_duration,
    };

    #[test]
    fn test_parse_duration_for_each_unit() {
        assert_eq!(parse_duration("30s"), Ok(30));
        assert_eq!(parse_duration("5m"), Ok(300));
        assert_eq!(parse_duration("2h"), Ok(7200));
        assert_eq!(parse_duration("1d"), Ok(86400));
    }

    #[test]
    fn test_parse_duration_with_unknown_unit() {
        assert_eq!(parse_duration("10x"), Err(ParseDurationError::UnknownUnit));
        assert_eq!(parse_duration(""), Err(ParseDurationError::UnknownUnit));
    }

    #[test]
    fn test_parse_duration_with_invalid_magnitude() {
        assert_eq!(parse_duration("xs"), Err(ParseDurationError::InvalidMagnitude));
        assert_eq!(parse_duration("s"), Err(ParseDurationError::InvalidMagnitude));
        assert_eq!(parse_duration("1.5h"), Err(ParseDurationError::InvalidMagnitude));
    }

    #[test]
    fn test_parse_duration_with_an_overflowing_magnitude() {
        assert_eq!(
            parse_duration("300000000000000000d"),
            Err(ParseDurationError::InvalidMagnitude)
        );
        assert_eq!(
            parse_duration(&format!("{}s", u64::MAX)),
            Ok(u64::MAX)
        );
        assert_eq!(
            parse_duration(&format!("{}m", u64::MAX)),
            Err(ParseDurationError::InvalidMagnitude)
        );
    }

    #[test]
    fn test_parse_channel_mention() {
        assert_eq!(parse_channel_mention("<#1234>"), Some(ChannelId::new(1234)));
        assert_eq!(parse_channel_mention(" <#1234> "), Some(ChannelId::new(1234)));
    }

    #[test]
    fn test_parse_channel_mention_with_invalid_input() {
        assert_eq!(parse_channel_mention("general"), None);
        assert_eq!(parse_channel_mention("<#general>"), None);
        assert_eq!(parse_channel_mention("<@1234>"), None);
        assert_eq!(parse_channel_mention(""), None);
    }
}
