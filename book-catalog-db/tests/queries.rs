use book_catalog_core::{Book, GroupBy, GroupCount, NewBook};
use book_catalog_db::*;

fn add(catalog: &Catalog, title: &str, author: &str, genre: &str, year: i64) -> Book {
    catalog
        .add_book(NewBook::new(title, author, genre, year).unwrap())
        .unwrap()
}

fn setup_catalog() -> Catalog {
    let catalog = Catalog::open_in_memory().unwrap();
    add(&catalog, "Neuromancer", "William Gibson", "Sci-Fi", 1984);
    add(&catalog, "dune", "Frank Herbert", "Sci-Fi", 1965);
    add(&catalog, "The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937);
    add(&catalog, "Emma", "Jane Austen", "Classic", 1815);
    add(&catalog, "Persuasion", "Jane Austen", "Classic", 1817);
    catalog
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

#[test]
fn list_is_alphabetical_ignoring_case() {
    let catalog = setup_catalog();
    let books = catalog.list_books().unwrap();
    assert_eq!(
        titles(&books),
        vec!["dune", "Emma", "Neuromancer", "Persuasion", "The Hobbit"]
    );
}

#[test]
fn list_empty_catalog() {
    let catalog = Catalog::open_in_memory().unwrap();
    assert!(catalog.list_books().unwrap().is_empty());
}

#[test]
fn books_by_id_is_insertion_order() {
    let catalog = setup_catalog();
    let books = catalog.books_by_id().unwrap();
    assert_eq!(books[0].title, "Neuromancer");
    assert!(books.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn search_finds_added_book() {
    let catalog = Catalog::open_in_memory().unwrap();
    let dune = add(&catalog, "Dune", "Frank Herbert", "Sci-Fi", 1965);
    add(&catalog, "Emma", "Jane Austen", "Classic", 1815);

    let results = catalog.search_books("dune").unwrap();
    assert_eq!(results, vec![dune]);
}

#[test]
fn search_matches_title_author_or_genre() {
    let catalog = setup_catalog();

    assert_eq!(
        titles(&catalog.search_books("AUSTEN").unwrap()),
        vec!["Emma", "Persuasion"]
    );
    assert_eq!(
        titles(&catalog.search_books("sci").unwrap()),
        vec!["dune", "Neuromancer"]
    );
    assert_eq!(
        titles(&catalog.search_books("hob").unwrap()),
        vec!["The Hobbit"]
    );
}

#[test]
fn search_matches_exactly_the_qualifying_set() {
    let catalog = setup_catalog();
    let keyword = "er";
    let expected: Vec<Book> = catalog
        .list_books()
        .unwrap()
        .into_iter()
        .filter(|b| {
            [&b.title, &b.author, &b.genre]
                .iter()
                .any(|field| field.to_lowercase().contains(keyword))
        })
        .collect();
    assert_eq!(catalog.search_books(keyword).unwrap(), expected);
}

#[test]
fn search_without_match_is_empty() {
    let catalog = setup_catalog();
    assert!(catalog.search_books("zzz").unwrap().is_empty());
}

#[test]
fn search_treats_wildcards_literally() {
    let catalog = setup_catalog();
    add(&catalog, "100% Fun", "Someone", "Humor", 2001);
    assert!(catalog.search_books("_").unwrap().is_empty());
    assert_eq!(titles(&catalog.search_books("%").unwrap()), vec!["100% Fun"]);
}

#[test]
fn search_rejects_empty_keyword() {
    let catalog = setup_catalog();
    assert!(matches!(
        catalog.search_books("   "),
        Err(OperationError::Validation(_))
    ));
}

#[test]
fn report_by_genre_orders_by_count() {
    let catalog = Catalog::open_in_memory().unwrap();
    add(&catalog, "Dune", "Frank Herbert", "Sci-Fi", 1965);
    add(&catalog, "The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937);
    add(&catalog, "Neuromancer", "William Gibson", "Sci-Fi", 1984);

    let rows = catalog.report(GroupBy::Genre).unwrap();
    assert_eq!(
        rows,
        vec![
            GroupCount {
                value: "Sci-Fi".to_string(),
                count: 2
            },
            GroupCount {
                value: "Fantasy".to_string(),
                count: 1
            },
        ]
    );
}

#[test]
fn report_breaks_ties_by_value() {
    let catalog = setup_catalog();
    let rows = catalog.report(GroupBy::Author).unwrap();
    let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "Jane Austen",
            "Frank Herbert",
            "J.R.R. Tolkien",
            "William Gibson"
        ]
    );
    assert_eq!(rows[0].count, 2);
}

#[test]
fn report_counts_sum_to_total() {
    let catalog = setup_catalog();
    let total = catalog.count().unwrap();
    for &group_by in GroupBy::all() {
        let rows = catalog.report(group_by).unwrap();
        assert_eq!(rows.iter().map(|r| r.count).sum::<i64>(), total);
        assert!(rows.windows(2).all(|w| {
            w[0].count > w[1].count || (w[0].count == w[1].count && w[0].value < w[1].value)
        }));
    }
}

#[test]
fn report_on_empty_catalog() {
    let catalog = Catalog::open_in_memory().unwrap();
    assert!(catalog.report(GroupBy::Genre).unwrap().is_empty());
}

#[test]
fn search_folds_non_ascii_case() {
    let catalog = Catalog::open_in_memory().unwrap();
    let eclair = add(&catalog, "Éclair", "Zoë Ångström", "Pâtisserie", 2000);
    add(&catalog, "Dune", "Frank Herbert", "Sci-Fi", 1965);

    assert_eq!(catalog.search_books("éclair").unwrap(), vec![eclair.clone()]);
    assert_eq!(catalog.search_books("ZOË").unwrap(), vec![eclair.clone()]);
    assert_eq!(catalog.search_books("PÂTISS").unwrap(), vec![eclair]);
}

#[test]
fn list_orders_non_ascii_titles_ignoring_case() {
    let catalog = Catalog::open_in_memory().unwrap();
    add(&catalog, "Ölfass", "A", "B", 1);
    add(&catalog, "öde", "A", "B", 2);
    assert_eq!(titles(&catalog.list_books().unwrap()), vec!["öde", "Ölfass"]);
}
