/*
 * Theme Module
 *
 * Named palettes for the field: background, particle accent and link color.
 * Switching a theme never touches particle state.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: (u8, u8, u8),
    pub accent: (u8, u8, u8),
    pub link: (u8, u8, u8),
}

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "midnight",
        background: (13, 17, 33),
        accent: (255, 107, 157),
        link: (255, 107, 157),
    },
    Theme {
        name: "rose",
        background: (36, 13, 28),
        accent: (255, 179, 198),
        link: (244, 143, 177),
    },
    Theme {
        name: "ember",
        background: (24, 12, 6),
        accent: (255, 171, 64),
        link: (255, 112, 67),
    },
    Theme {
        name: "mint",
        background: (6, 26, 22),
        accent: (128, 226, 188),
        link: (77, 182, 172),
    },
];

pub fn index_of(name: &str) -> Option<usize> {
    THEMES.iter().position(|theme| theme.name == name)
}

pub fn next_index(index: usize) -> usize {
    (index + 1) % THEMES.len()
}

impl Theme {
    pub fn background_color(&self) -> Rgb<u8> {
        let (r, g, b) = self.background;
        rgb(r, g, b)
    }

    pub fn accent_color(&self, alpha: f32) -> Rgba {
        let (r, g, b) = self.accent;
        rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            alpha,
        )
    }

    pub fn link_color(&self, alpha: f32) -> Rgba {
        let (r, g, b) = self.link;
        rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_is_found_by_name() {
        for (i, theme) in THEMES.iter().enumerate() {
            assert_eq!(index_of(theme.name), Some(i));
        }
        assert_eq!(index_of("no-such-theme"), None);
    }

    #[test]
    fn cycling_walks_every_theme_and_wraps() {
        let mut index = 0;
        for _ in 0..THEMES.len() {
            index = next_index(index);
        }
        assert_eq!(index, 0);
    }
}
