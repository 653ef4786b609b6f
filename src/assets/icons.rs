/// Icon shown for countries without a mapped flag.
pub const FALLBACK_ICON: &str = "\u{1F3F3}";

/// Static country → flag lookup with a defined fallback.
///
/// Covers the dataset's largest entries; everything else gets
/// [`FALLBACK_ICON`]. Pure and total.
pub fn icon_for(country: &str) -> &'static str {
    match country {
        "China" => "\u{1F1E8}\u{1F1F3}",
        "India" => "\u{1F1EE}\u{1F1F3}",
        "United States" => "\u{1F1FA}\u{1F1F8}",
        "Indonesia" => "\u{1F1EE}\u{1F1E9}",
        "Pakistan" => "\u{1F1F5}\u{1F1F0}",
        "Nigeria" => "\u{1F1F3}\u{1F1EC}",
        "Brazil" => "\u{1F1E7}\u{1F1F7}",
        "Bangladesh" => "\u{1F1E7}\u{1F1E9}",
        "Russia" => "\u{1F1F7}\u{1F1FA}",
        "Mexico" => "\u{1F1F2}\u{1F1FD}",
        "Japan" => "\u{1F1EF}\u{1F1F5}",
        "Ethiopia" => "\u{1F1EA}\u{1F1F9}",
        "Philippines" => "\u{1F1F5}\u{1F1ED}",
        "Egypt" => "\u{1F1EA}\u{1F1EC}",
        "Vietnam" => "\u{1F1FB}\u{1F1F3}",
        "Germany" => "\u{1F1E9}\u{1F1EA}",
        "Turkey" => "\u{1F1F9}\u{1F1F7}",
        "Iran" => "\u{1F1EE}\u{1F1F7}",
        "France" => "\u{1F1EB}\u{1F1F7}",
        "United Kingdom" => "\u{1F1EC}\u{1F1E7}",
        "Thailand" => "\u{1F1F9}\u{1F1ED}",
        "Italy" => "\u{1F1EE}\u{1F1F9}",
        "South Africa" => "\u{1F1FF}\u{1F1E6}",
        _ => FALLBACK_ICON,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
