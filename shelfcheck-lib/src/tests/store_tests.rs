use super::*;
use shelfcheck_core::Format;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn three_and_four_field_lines() {
    let book = parse_tdf_line("Jane Austen\tEmma\teBook24").unwrap();
    assert_eq!(book.author(), "Jane Austen");
    assert_eq!(book.title(), "Emma");
    assert!(book.recommender().is_none());
    assert_eq!(book.format(), Format::EBook);
    assert_eq!(book.file_tag(), "eBook24");

    let book = parse_tdf_line("Frank Herbert\tDune\tPat\tBook").unwrap();
    assert_eq!(book.recommender(), Some("Pat"));
    assert_eq!(book.format(), Format::Physical);
}

#[test]
fn empty_recommender_is_dropped() {
    let book = parse_tdf_line("Frank Herbert\tDune\t\tH").unwrap();
    assert!(book.recommender().is_none());
    assert_eq!(book.format(), Format::Physical);
}

#[test]
fn trailing_tabs_do_not_count_as_fields() {
    let book = parse_tdf_line("Frank Herbert\tDune\t??\t").unwrap();
    assert!(book.is_new());
}

#[test]
fn wrong_field_counts_are_rejected() {
    assert!(parse_tdf_line("Frank Herbert\tDune").is_err());
    assert!(parse_tdf_line("a\tb\tc\td\te").is_err());
}

#[test]
fn read_skips_comments_blanks_and_bad_lines() {
    let text = "# status as of whenever\n\
                Jane Austen\tEmma\tREAD\n\
                \n\
                just one field\n\
                Frank Herbert\tDune\tNO23\n";
    let books = read_tdf(text.as_bytes()).unwrap();
    assert_eq!(books.len(), 2);
    assert!(books[0].is_consumed());
    assert_eq!(books[1].format(), Format::NotAvailable);
}

#[test]
fn write_emits_dated_header_and_lines() {
    let books = vec![
        Book::new("Jane Austen", "Emma", None, "eBook24"),
        Book::new("Frank Herbert", "Dune", Some("Pat".into()), "Book"),
    ];
    let mut out = Vec::new();
    write_tdf(&mut out, &books, date()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "# status as of Sun, October 18 2026\n\
         Jane Austen\tEmma\teBook24\n\
         Frank Herbert\tDune\tPat\tBook\n"
    );
}

#[test]
fn tdf_store_saves_over_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.tdf");
    fs::write(&path, "Jane Austen\tPride and Prejudice\t??\n").unwrap();

    let mut store = TdfStore::new(&path).with_date(date());
    let mut books = store.load().unwrap();
    assert_eq!(books.len(), 1);
    books[0].upgrade(Format::EBook, 2026);
    store.save(&books).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# status as of Sun, October 18 2026\n"));
    assert!(text.ends_with("Jane Austen\tPride and Prejudice\teBook26\n"));
    assert!(!dir.path().join("books.tdf.tmp").exists());

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded[0].format(), Format::EBook);
}

#[test]
fn missing_tdf_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = TdfStore::new(dir.path().join("absent.tdf"));
    assert!(matches!(store.load(), Err(StoreError::Io(_))));
}

const WATCHLIST: &str = "\
Position,Const,Created,Modified,Description,Title,URL,Title Type,IMDb Rating,Runtime (mins),Year,Genres
1,tt0113277,2024-01-01,2024-01-01,,Heat,https://www.imdb.com/title/tt0113277/,movie,8.3,170,1995,Crime
2,tt0190332,2024-01-01,2024-01-01,,\"Crouching Tiger, Hidden Dragon\",https://www.imdb.com/title/tt0190332/,movie,7.9,120,2000,Action
3,tt9999999,2024-01-01,2024-01-01,,Untitled,https://www.imdb.com/title/tt9999999/,movie,,,,
4,tt0000001,short,row
";

#[test]
fn watchlist_rows_become_movies() {
    let movies = read_watchlist(WATCHLIST.as_bytes()).unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title(), "Heat");
    assert_eq!(movies[0].year(), 1995);
    assert_eq!(movies[1].title(), "Crouching Tiger, Hidden Dragon");
    assert!(movies.iter().all(|m| m.is_new()));
}

#[test]
fn watchlist_save_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("watchlist.csv");
    fs::write(&path, WATCHLIST).unwrap();

    let mut store = WatchlistStore::new(&path);
    let mut movies = store.load().unwrap();
    movies[0].upgrade(Format::Video, 2026);
    store.save(&movies).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), WATCHLIST);
}
