//! Avatar: profile picture, or generated initials on a stable color.

use dioxus::prelude::*;

const PALETTE: [&str; 8] = [
    "#c62828", "#6a1b9a", "#283593", "#0277bd", "#00695c", "#558b2f", "#ef6c00", "#4e342e",
];

/// First letters of the first and last word, uppercased. "?" for an
/// empty name.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next();
    let last = words.last();

    let mut out = String::new();
    if let Some(word) = first {
        if let Some(c) = word.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    if let Some(word) = last {
        if let Some(c) = word.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    if out.is_empty() {
        out.push('?');
    }
    out
}

/// Deterministic palette pick so a given name always gets the same color.
pub fn color_for(name: &str) -> &'static str {
    let mut hash: u32 = 0;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    PALETTE[hash as usize % PALETTE.len()]
}

#[component]
pub fn Avatar(
    name: String,
    #[props(default)] image_url: Option<String>,
    #[props(default = 96)] size: u32,
) -> Element {
    if let Some(url) = image_url {
        return rsx! {
            img {
                class: "avatar avatar-image",
                style: "width: {size}px; height: {size}px",
                src: "{url}",
                alt: "{name}",
            }
        };
    }

    let letters = initials(&name);
    let color = color_for(&name);
    let font_size = size * 2 / 5;

    rsx! {
        div {
            class: "avatar avatar-initials",
            style: "width: {size}px; height: {size}px; background: {color}; font-size: {font_size}px",
            title: "{name}",
            "{letters}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_and_last_word() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("jane van der berg"), "JB");
        assert_eq!(initials("Plato"), "P");
    }

    #[test]
    fn initials_handle_blank_names() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn color_is_stable_and_from_the_palette() {
        let color = color_for("Jane Doe");
        assert_eq!(color, color_for("Jane Doe"));
        assert!(PALETTE.contains(&color));
        assert!(PALETTE.contains(&color_for("")));
    }
}
