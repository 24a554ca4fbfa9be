use colored::Color;

const GRAY: Color = Color::TrueColor { r: 0x80, g: 0x80, b: 0x80 };
const GREEN: Color = Color::TrueColor { r: 0x00, g: 0x80, b: 0x00 };
const CYAN: Color = Color::TrueColor { r: 0x03, g: 0xA8, b: 0x9E };
const BLUE: Color = Color::TrueColor { r: 0x00, g: 0x00, b: 0xFF };
const VIOLET: Color = Color::TrueColor { r: 0xAA, g: 0x00, b: 0xAA };
const ORANGE: Color = Color::TrueColor { r: 0xFF, g: 0x8C, b: 0x00 };
const RED: Color = Color::TrueColor { r: 0xFF, g: 0x00, b: 0x00 };

/// Colour of a rating value on the usual tier scale
pub fn rating_color(rating: i32) -> Color {
    match rating {
        i32::MIN..=1199 => GRAY,
        1200..=1399 => GREEN,
        1400..=1599 => CYAN,
        1600..=1899 => BLUE,
        1900..=2099 => VIOLET,
        2100..=2399 => ORANGE,
        _ => RED,
    }
}

/// Colour of a rank title; unknown titles and unranked users are gray
pub fn rank_color(rank: Option<&str>) -> Color {
    let Some(rank) = rank else {
        return GRAY;
    };

    match rank.to_lowercase().as_str() {
        "pupil" => GREEN,
        "specialist" => CYAN,
        "expert" => BLUE,
        "candidate master" => VIOLET,
        "master" | "international master" => ORANGE,
        "grandmaster" | "international grandmaster" | "legendary grandmaster" => RED,
        _ => GRAY,
    }
}
