use crate::error::BookingError;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Convert an English weekday name to its ISO number (Monday = 1).
pub fn weekday_number(name: &str) -> Result<u32, BookingError> {
    match name.to_lowercase().as_str() {
        "monday" => Ok(1),
        "tuesday" => Ok(2),
        "wednesday" => Ok(3),
        "thursday" => Ok(4),
        "friday" => Ok(5),
        "saturday" => Ok(6),
        "sunday" => Ok(7),
        _ => Err(BookingError::InvalidDay(format!("str: {name}"))),
    }
}

/// Convert an ISO weekday number (Monday = 1) to its English name.
pub fn weekday_name(number: u32) -> Result<&'static str, BookingError> {
    if (1..=7).contains(&number) {
        Ok(WEEKDAY_NAMES[(number - 1) as usize])
    } else {
        Err(BookingError::InvalidDay(format!("int: {number}")))
    }
}

/// Parse a schedule `day` field, which may be a weekday name or a number 1-7.
pub fn parse_weekday(field: &str) -> Result<u32, BookingError> {
    let trimmed = field.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        weekday_name(number)?;
        return Ok(number);
    }
    weekday_number(trimmed)
}
