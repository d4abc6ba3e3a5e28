use std::io::{self, Write};

use crate::application::catalog::Catalog;

/// 書籍一覧を表示する
///
/// 各書籍を `ISBN: <isbn>: <JSON>` の形式で1行ずつ出力する。
pub fn display_books<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    if catalog.books().is_empty() {
        return writeln!(out, "\nNo books in the library.");
    }
    writeln!(out, "\n--- Books in Library ---")?;
    for book in catalog.books() {
        let record = serde_json::to_string(book).map_err(io::Error::other)?;
        writeln!(out, "ISBN: {}: {}", book.isbn, record)?;
    }
    Ok(())
}

/// 会員一覧を表示する
pub fn display_members<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    if catalog.members().is_empty() {
        return writeln!(out, "\nNo members in the library.");
    }
    writeln!(out, "\n--- Library Members ---")?;
    for member in catalog.members() {
        let record = serde_json::to_string(member).map_err(io::Error::other)?;
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
