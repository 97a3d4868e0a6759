use book_catalog::catalog::filter::{books_in_category, distinct_authors, filter_books};
use book_catalog::catalog::seed::seed_books;
use book_catalog::catalog::taxonomy;

#[test]
fn test_empty_term_and_all_matches_everything_in_order() {
    let books = seed_books();
    let result = filter_books(&books, "", taxonomy::ALL_CATEGORIES);

    assert_eq!(result.len(), books.len());
    let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
    let expected: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_search_is_case_insensitive_and_substring_based() {
    let books = seed_books();

    let result = filter_books(&books, "años", taxonomy::ALL_CATEGORIES);
    assert!(result.iter().any(|b| b.title == "Cien Años de Soledad"));

    let result = filter_books(&books, "CERVANTES", taxonomy::ALL_CATEGORIES);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "El Quijote");
}

#[test]
fn test_search_covers_description_category_and_subcategory() {
    let books = seed_books();

    // description
    let result = filter_books(&books, "macondo", taxonomy::ALL_CATEGORIES);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "2");

    // category
    let result = filter_books(&books, "educación primaria", taxonomy::ALL_CATEGORIES);
    assert_eq!(result.len(), 6);

    // subcategory
    let result = filter_books(&books, "lenguaje", taxonomy::ALL_CATEGORIES);
    assert_eq!(result.len(), 1);
}

#[test]
fn test_subcategory_filter_matches_exactly() {
    let books = seed_books();
    let result = filter_books(&books, "", "Matemáticas");

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|b| b.subcategory == "Matemáticas"));
}

#[test]
fn test_seed_latinoamericana_scenario() {
    let books = seed_books();
    assert_eq!(books.len(), 10);

    let result = filter_books(&books, "", "Literatura Latinoamericana");
    assert_eq!(result.len(), 3);
    assert!(result
        .iter()
        .all(|b| b.category == "Literatura General"
            && b.subcategory == "Literatura Latinoamericana"));

    // Relative order preserved
    let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "4"]);
}

#[test]
fn test_category_filter_matches_top_level_category_too() {
    let books = seed_books();
    let result = filter_books(&books, "", "Literatura General");
    assert_eq!(result.len(), 4);
}

#[test]
fn test_search_and_category_are_anded() {
    let books = seed_books();

    // "soledad" matches a title, but no Matemáticas book carries it
    let result = filter_books(&books, "soledad", "Matemáticas");
    assert!(result.is_empty());

    let result = filter_books(&books, "suma", "Matemáticas");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "6");
}

#[test]
fn test_filter_options_start_with_the_all_sentinel() {
    let options = taxonomy::all_filter_options();
    assert_eq!(options[0], taxonomy::ALL_CATEGORIES);
    assert!(options.contains(&"Cuentos Infantiles"));
    // 1 sentinel + 8 literatura + 7 educación
    assert_eq!(options.len(), 16);
}

#[test]
fn test_taxonomy_lookups() {
    assert!(taxonomy::is_valid_pair("Educación Primaria", "Matemáticas"));
    assert!(!taxonomy::is_valid_pair("Literatura General", "Matemáticas"));
    assert!(taxonomy::subcategories_of("Sin Categoría").is_none());
    assert_eq!(taxonomy::category_names().count(), 2);
    assert_eq!(
        taxonomy::subcategories_of("Literatura General").map(|s| s.len()),
        Some(8)
    );
}

#[test]
fn test_category_stats() {
    let books = seed_books();
    assert_eq!(books_in_category(&books, "Literatura General"), 4);
    assert_eq!(books_in_category(&books, "Educación Primaria"), 6);
    assert_eq!(distinct_authors(&books), 10);
}

#[test]
fn test_seed_books_respect_the_taxonomy() {
    for book in seed_books() {
        assert!(
            taxonomy::is_valid_pair(&book.category, &book.subcategory),
            "{} has invalid pair {}/{}",
            book.title,
            book.category,
            book.subcategory
        );
    }
}
