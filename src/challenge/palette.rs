//! The fixed color palette.
//!
//! Eight families, each with a canonical shade and three near-duplicate
//! variants. Harder difficulties may display a variant instead of the
//! canonical shade, which is what makes two options of different families
//! look alike.

/// One color family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorFamily {
    /// Semantic name shown to the player.
    pub name: &'static str,
    /// Canonical hex shade.
    pub canonical: &'static str,
    /// Near-duplicate hex shades.
    pub variants: [&'static str; 3],
}

pub static PALETTE: [ColorFamily; 8] = [
    ColorFamily {
        name: "red",
        canonical: "#dc2626",
        variants: ["#ef4444", "#f87171", "#fca5a5"],
    },
    ColorFamily {
        name: "orange",
        canonical: "#f59e0b",
        variants: ["#f97316", "#fb923c", "#fdba74"],
    },
    ColorFamily {
        name: "blue",
        canonical: "#3b82f6",
        variants: ["#2563eb", "#60a5fa", "#93c5fd"],
    },
    ColorFamily {
        name: "green",
        canonical: "#10b981",
        variants: ["#059669", "#34d399", "#6ee7b7"],
    },
    ColorFamily {
        name: "purple",
        canonical: "#8b5cf6",
        variants: ["#7c3aed", "#a78bfa", "#c4b5fd"],
    },
    ColorFamily {
        name: "pink",
        canonical: "#ec4899",
        variants: ["#db2777", "#f472b6", "#f9a8d4"],
    },
    ColorFamily {
        name: "yellow",
        canonical: "#eab308",
        variants: ["#ca8a04", "#facc15", "#fde047"],
    },
    ColorFamily {
        name: "teal",
        canonical: "#14b8a6",
        variants: ["#0d9488", "#2dd4bf", "#5eead4"],
    },
];

impl ColorFamily {
    /// Find a family by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static ColorFamily> {
        PALETTE.iter().find(|family| family.name == name)
    }

    /// Whether `hex` is one of this family's shades.
    #[must_use]
    pub fn owns_shade(&self, hex: &str) -> bool {
        self.canonical == hex || self.variants.contains(&hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_shape() {
        assert_eq!(PALETTE.len(), 8);

        for family in &PALETTE {
            assert!(family.owns_shade(family.canonical));
            for variant in family.variants {
                assert!(family.owns_shade(variant));
                assert_ne!(variant, family.canonical);
            }
        }
    }

    #[test]
    fn test_shades_are_unique_across_families() {
        let mut shades: Vec<&str> = PALETTE
            .iter()
            .flat_map(|f| std::iter::once(f.canonical).chain(f.variants))
            .collect();
        let total = shades.len();

        shades.sort_unstable();
        shades.dedup();

        assert_eq!(shades.len(), total);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(ColorFamily::by_name("teal").map(|f| f.canonical), Some("#14b8a6"));
        assert!(ColorFamily::by_name("magenta").is_none());
    }
}
