//! URL slug derivation for artwork names.
//!
//! Slugs are recomputed from the name on every read, so renaming an artwork
//! changes its public URL.

use unicode_normalization::UnicodeNormalization;

use crate::artwork::Artwork;

/// Remove combining diacritical marks (U+0300..=U+036F) after NFD
/// decomposition, so `"é"` becomes `"e"`.
pub fn strip_accents(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Derive the URL slug for an artwork name.
///
/// Accents are stripped, the result is lowercased, every run of characters
/// outside `[a-z0-9]` collapses to a single `-`, and leading/trailing
/// hyphens are trimmed.
///
/// ```
/// use galleria_core::slug::slugify;
///
/// assert_eq!(slugify("Mona Lisa"), "mona-lisa");
/// assert_eq!(slugify("La Nuit étoilée"), "la-nuit-etoilee");
/// ```
pub fn slugify(name: &str) -> String {
    let folded = strip_accents(name).to_lowercase();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_hyphen = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Find the first artwork whose derived slug equals `slug`.
pub fn find_by_slug<'a>(artworks: &'a [Artwork], slug: &str) -> Option<&'a Artwork> {
    artworks.iter().find(|a| a.slug == slug)
}

/// Position of the artwork with `slug` within `artworks`.
pub fn position_of_slug(artworks: &[Artwork], slug: &str) -> Option<usize> {
    artworks.iter().position(|a| a.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name() {
        assert_eq!(slugify("Mona Lisa"), "mona-lisa");
    }

    #[test]
    fn accents_are_stripped() {
        assert_eq!(slugify("Déjeuner sur l'herbe"), "dejeuner-sur-l-herbe");
        assert_eq!(strip_accents("Crème brûlée"), "Creme brulee");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(slugify("The Storm -- on the Sea!!"), "the-storm-on-the-sea");
    }

    #[test]
    fn edges_are_trimmed() {
        assert_eq!(slugify("  (Self-Portrait)  "), "self-portrait");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(slugify("No. 5, 1948"), "no-5-1948");
    }

    #[test]
    fn non_latin_only_name_is_empty() {
        assert_eq!(slugify("神奈川"), "");
    }

    #[test]
    fn idempotent() {
        let names = [
            "Mona Lisa",
            "La Nuit étoilée",
            "Girl with a Pearl Earring",
            "The Great Wave off Kanagawa",
            "Guernica",
        ];
        for name in names {
            let once = slugify(name);
            assert_eq!(slugify(&once), once, "slugify not idempotent for {name}");
        }
    }

    #[test]
    fn injective_on_fixture_names() {
        let names = [
            "Starry Night",
            "The Storm on the Sea of Galilee",
            "Lady with an Ermine",
            "The Night Café",
            "The Basket of Apples",
            "The Boy in the Red Vest",
            "Girl with a Pearl Earring",
            "Guernica",
            "Penitent Magdalene",
            "The Swing",
            "Van Gogh Self-portrait",
            "The Sleeping Gypsy",
            "Arnolfini Portrait",
            "Mona Lisa",
        ];
        let mut slugs: Vec<String> = names.iter().map(|n| slugify(n)).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), names.len());
    }
}
