use super::*;
use crate::candidate::{CatalogResult, FeedItem, ListingRow};
use shelfcheck_core::{Book, Movie};

fn feed(title: &str, creator: &str, format: &str) -> CandidateRecord {
    CandidateRecord::Feed(FeedItem {
        title: Some(title.into()),
        creator: Some(creator.into()),
        format: Some(format.into()),
    })
}

fn listing(title: &str, year: &str) -> CandidateRecord {
    CandidateRecord::Listing(ListingRow {
        title: Some(title.into()),
        year: Some(year.into()),
    })
}

#[test]
fn normalize_title_drops_subtitle() {
    assert_eq!(normalize_title("Dune: House Atreides"), "dune");
    assert_eq!(normalize_title("  The Hobbit  "), "the hobbit");
    assert_eq!(normalize_title("Odd: Thomas: Again"), "odd");
    assert_eq!(normalize_title(":"), "");
}

#[test]
fn empty_candidate_list_is_no_match() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    assert!(find_best_match(&book, &[]).is_none());
}

#[test]
fn subtitle_is_ignored_when_comparing() {
    let book = Book::new("Brian Herbert", "Dune: House Atreides", None, "??");
    let candidates = vec![CandidateRecord::Catalog(CatalogResult {
        title: Some("Dune".into()),
        authors: vec!["Brian Herbert".into()],
        formats: vec![],
    })];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Dune"));
    assert_eq!(best.title_distance, Distance::Finite(0));
    assert_eq!(best.author_distance, Distance::Finite(0));
}

#[test]
fn comparison_ignores_case_and_padding() {
    let book = Book::new("Jane Austen", "Pride and Prejudice", None, "??");
    let candidates = vec![feed("  PRIDE AND PREJUDICE ", "jane austen", "eBook")];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("PRIDE AND PREJUDICE"));
    assert_eq!(best.title_distance, Distance::Finite(0));
    assert_eq!(best.author_distance, Distance::Finite(0));
    assert_eq!(best.format, Format::EBook);
    assert_eq!(best.desired.title(), "Pride and Prejudice");
}

#[test]
fn best_record_wins_over_earlier_worse_one() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![
        feed("Dune Messiah", "Frank Herbert", "Book"),
        feed("Dune", "Frank Herbert", "Book"),
        feed("Children of Dune", "Frank Herbert", "Book"),
    ];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Dune"));
    assert_eq!(best.title_distance, Distance::Finite(0));
}

#[test]
fn later_record_wins_exact_ties() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![
        feed("Dune", "Frank Herbert", "Book"),
        feed("DUNE", "Frank Herbert", "Book"),
    ];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("DUNE"));
}

#[test]
fn winner_must_not_be_worse_on_either_axis() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![
        feed("Dune", "Frank Herbert", "Book"),
        // Closer on neither axis than what was already seen.
        feed("Dune", "Brian Herbert", "Book"),
        // Better author than nothing, but the title is far off.
        feed("The Dune Encyclopedia", "Frank Herbert", "Book"),
    ];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Dune"));
    assert_eq!(best.author.as_deref(), Some("Frank Herbert"));
    assert_eq!(best.author_distance, Distance::Finite(0));
}

#[test]
fn running_minima_block_split_winners() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![
        // Good title, poor author.
        feed("Dune", "Kevin J. Anderson", "Book"),
        // Poor title, good author: better author but worse title, so no takeover.
        feed("Heretics of Dune", "Frank Herbert", "Book"),
    ];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Dune"));
    assert_eq!(best.author.as_deref(), Some("Kevin J. Anderson"));

    // The minima moved, so a record that is only as good as the first one
    // on the title but worse than the second on the author cannot win either.
    let mut more = candidates.clone();
    more.push(feed("Dune", "Frank Herbertson", "Book"));
    let best = find_best_match(&book, &more).unwrap();
    assert_eq!(best.author.as_deref(), Some("Kevin J. Anderson"));
}

#[test]
fn format_is_best_across_all_records() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![
        feed("Dune", "Frank Herbert", "Book"),
        feed("Nothing Like It", "Someone Else", "eBook"),
    ];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Dune"));
    assert_eq!(best.format, Format::EBook);
}

#[test]
fn unknown_formats_leave_not_available() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![feed("Dune", "Frank Herbert", "Large print")];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.format, Format::NotAvailable);
}

#[test]
fn video_badges_do_not_count_for_books() {
    let book = Book::new("Jane Austen", "Emma", None, "??");
    let candidates = vec![feed("Emma", "Jane Austen", "Video")];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title_distance, Distance::Finite(0));
    assert_eq!(best.format, Format::NotAvailable);
}

#[test]
fn catalog_result_uses_closest_author() {
    let book = Book::new("Neil Gaiman", "Good Omens", None, "??");
    let candidates = vec![CandidateRecord::Catalog(CatalogResult {
        title: Some("Good Omens".into()),
        authors: vec!["Terry Pratchett".into(), "Neil Gaiman".into()],
        formats: vec!["Book".into()],
    })];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.author.as_deref(), Some("Neil Gaiman"));
    assert_eq!(best.author_distance, Distance::Finite(0));
    assert_eq!(best.format, Format::Physical);
}

#[test]
fn missing_fields_skip_only_that_axis() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![CandidateRecord::Feed(FeedItem {
        title: Some("Dune".into()),
        creator: None,
        format: Some("eBook".into()),
    })];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(best.title_distance, Distance::Finite(0));
    assert_eq!(best.author_distance, Distance::Infinite);
    assert!(best.author.is_none());
    assert_eq!(best.format, Format::EBook);
}

#[test]
fn records_without_titles_still_yield_a_result() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![CandidateRecord::Feed(FeedItem::default())];
    let best = find_best_match(&book, &candidates).unwrap();
    assert!(best.title.is_none());
    assert_eq!(best.title_distance, Distance::Infinite);
}

#[test]
fn movie_compares_title_with_year() {
    let movie = Movie::new("Heat", 1995);
    let candidates = vec![listing("Heat", "1986"), listing("Heat", "1995")];
    let best = find_best_match(&movie, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Heat (1995)"));
    assert_eq!(best.title_distance, Distance::Finite(0));
    assert_eq!(best.author_distance, Distance::Finite(0));
    assert!(best.author.is_none());
    assert_eq!(best.format, Format::Video);
}

#[test]
fn movie_keeps_subtitle() {
    let movie = Movie::new("Alien: Covenant", 2017);
    let candidates = vec![listing("Alien", "2017"), listing("Alien: Covenant", "2017")];
    let best = find_best_match(&movie, &candidates).unwrap();
    assert_eq!(best.title.as_deref(), Some("Alien: Covenant (2017)"));
    assert_eq!(best.title_distance, Distance::Finite(0));
}

#[test]
fn incomplete_listing_rows_are_not_compared() {
    let movie = Movie::new("Heat", 1995);
    let candidates = vec![CandidateRecord::Listing(ListingRow {
        title: Some("Heat".into()),
        year: None,
    })];
    let best = find_best_match(&movie, &candidates).unwrap();
    assert_eq!(best.title_distance, Distance::Infinite);
    assert_eq!(best.format, Format::NotAvailable);
}

#[test]
fn display_summarizes_match() {
    let book = Book::new("Frank Herbert", "Dune", None, "??");
    let candidates = vec![feed("Dune", "Frank Herbert", "eBook")];
    let best = find_best_match(&book, &candidates).unwrap();
    assert_eq!(
        best.to_string(),
        "title=Dune (0), author=Frank Herbert (0), format=eBook"
    );
}
