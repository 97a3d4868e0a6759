//! Pure query functions over the book list.

use std::collections::HashSet;

use super::models::Book;
use super::taxonomy;

/// Filter books by free-text search and category selection, preserving
/// the original relative order.
///
/// The search term matches case-insensitively as a substring of title,
/// author, description, category, or subcategory; an empty term matches
/// everything. The category filter matches when the selection is the
/// `"all"` sentinel or equals the book's category or subcategory. A book
/// is included when both predicates hold.
pub fn filter_books<'a>(
    books: &'a [Book],
    search_term: &str,
    selected_category: &str,
) -> Vec<&'a Book> {
    let term = search_term.to_lowercase();
    books
        .iter()
        .filter(|book| {
            let matches_search = term.is_empty()
                || book.title.to_lowercase().contains(&term)
                || book.author.to_lowercase().contains(&term)
                || book.description.to_lowercase().contains(&term)
                || book.category.to_lowercase().contains(&term)
                || book.subcategory.to_lowercase().contains(&term);

            let matches_category = selected_category == taxonomy::ALL_CATEGORIES
                || book.category == selected_category
                || book.subcategory == selected_category;

            matches_search && matches_category
        })
        .collect()
}

/// Number of books in a top-level category.
pub fn books_in_category(books: &[Book], category: &str) -> usize {
    books.iter().filter(|b| b.category == category).count()
}

/// Number of distinct authors across the catalog.
pub fn distinct_authors(books: &[Book]) -> usize {
    books
        .iter()
        .map(|b| b.author.as_str())
        .collect::<HashSet<_>>()
        .len()
}
