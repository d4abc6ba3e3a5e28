use crate::application::catalog::Catalog;

/// デモ用の初期データ
///
/// (isbn, title, author, genre, copies)
const BOOKS: [(&str, &str, &str, &str, i64); 5] = [
    (
        "SL001",
        "Intro to Programming",
        "Kairan Lebbie",
        "Non-Fiction",
        5,
    ),
    ("SL002", "Data Structures", "Haja Barrie", "Non-Fiction", 4),
    (
        "SL003",
        "Operating Systems",
        "Julius Kargbo",
        "Non-Fiction",
        3,
    ),
    (
        "SL004",
        "Discrete Mathematics",
        "Ibrahim Swarray",
        "Non-Fiction",
        2,
    ),
    ("SL005", "Database Systems", "Kumba Sesay", "Non-Fiction", 6),
];

/// (member_id, name, email)
const MEMBERS: [(&str, &str, &str); 3] = [
    ("905000001", "Sorie Kamara", "sorie.kamara@gmail.com"),
    ("905000002", "Fatmata Kargbo", "fatmatakargbo@gmail.com"),
    ("905000003", "Mohamed Conteh", "mohamed.conteh@gmail.com"),
];

/// 初期データを投入し、登録できた件数を返す
///
/// 既に同じキーが登録済みのレコードはスキップされる。
pub fn load_demo_data(catalog: &mut Catalog) -> usize {
    let mut books = 0;
    for (isbn, title, author, genre, copies) in BOOKS {
        if catalog.add_book(isbn, title, author, genre, copies) {
            books += 1;
        }
    }
    let mut members = 0;
    for (member_id, name, email) in MEMBERS {
        if catalog.add_member(member_id, name, email) {
            members += 1;
        }
    }

    tracing::info!(books, members, "demo data loaded");
    books + members
}
