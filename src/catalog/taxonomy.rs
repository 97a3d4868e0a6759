//! The fixed category -> subcategory enumeration governing book
//! classification. This is configuration, not data: it is never persisted
//! and not user-editable.

/// Sentinel category filter value matching every book.
pub const ALL_CATEGORIES: &str = "all";

/// Top-level categories with their ordered subcategory lists.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Literatura General",
        &[
            "Clásicos",
            "Literatura Latinoamericana",
            "Ciencia Ficción",
            "Romance",
            "Misterio",
            "Historia",
            "Biografía",
            "Ensayo",
        ],
    ),
    (
        "Educación Primaria",
        &[
            "Matemáticas",
            "Ciencias",
            "Lenguaje",
            "Historia",
            "Geografía",
            "Cuentos Infantiles",
            "Actividades",
        ],
    ),
];

/// The ordered subcategory list for a category, if the category exists.
pub fn subcategories_of(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, subs)| *subs)
}

/// All top-level category names, in declaration order.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(name, _)| *name)
}

/// Whether `subcategory` belongs to `category`'s enumerated list.
pub fn is_valid_pair(category: &str, subcategory: &str) -> bool {
    subcategories_of(category).is_some_and(|subs| subs.contains(&subcategory))
}

/// Category filter options for the catalog surface: the `"all"` sentinel
/// followed by every subcategory in taxonomy order.
pub fn all_filter_options() -> Vec<&'static str> {
    let mut options = vec![ALL_CATEGORIES];
    for (_, subs) in CATEGORIES {
        options.extend_from_slice(subs);
    }
    options
}
