use serde::Serialize;

use super::{
    BookChange, BorrowBookError, CopyCount, DeleteBookError, Genre, Isbn, ReturnBookError,
    SearchField, UpdateBookError,
};

/// Book集約 - 蔵書1タイトル分の在庫
///
/// 不変条件：
/// - `original_copies >= total_copies`
/// - 貸出中の冊数は `original_copies - total_copies` から導出する（書籍側に貸出先は持たない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    /// 現在貸出可能な冊数
    pub total_copies: u32,
    /// これまでに設定された冊数の最大値
    pub original_copies: u32,
}

impl Book {
    /// 貸出中の冊数
    pub fn borrowed_count(&self) -> u32 {
        self.original_copies - self.total_copies
    }

    /// 貸出可能な冊があるか
    pub fn is_available(&self) -> bool {
        self.total_copies > 0
    }
}

/// 純粋関数：書籍を登録する
///
/// 登録時点では貸出中の冊はないため、original_copies は total_copies と同じ値になる。
pub fn register_book(
    isbn: Isbn,
    title: String,
    author: String,
    genre: Genre,
    copies: CopyCount,
) -> Book {
    Book {
        isbn,
        title,
        author,
        genre,
        total_copies: copies.value(),
        original_copies: copies.value(),
    }
}

/// 純粋関数：書籍情報を更新する
///
/// ビジネスルール：
/// - 冊数は貸出中の冊数を下回れない
/// - original_copies は増える方向にのみ更新される（最大値の記録）
///
/// 副作用なし。新しいBookを返す。
pub fn update_book(book: &Book, change: BookChange) -> Result<Book, UpdateBookError> {
    let updated = match change {
        BookChange::Title(title) => Book {
            title,
            ..book.clone()
        },
        BookChange::Author(author) => Book {
            author,
            ..book.clone()
        },
        BookChange::Genre(genre) => Book {
            genre,
            ..book.clone()
        },
        BookChange::TotalCopies(copies) => {
            let requested = copies.value();
            let borrowed = book.borrowed_count();
            if requested < borrowed {
                return Err(UpdateBookError::BelowBorrowedCount {
                    requested,
                    borrowed,
                });
            }
            Book {
                total_copies: requested,
                original_copies: book.original_copies.max(requested),
                ..book.clone()
            }
        }
    };

    Ok(updated)
}

/// 純粋関数：削除可能か確認する
pub fn ensure_deletable(book: &Book) -> Result<(), DeleteBookError> {
    let borrowed = book.borrowed_count();
    if borrowed > 0 {
        return Err(DeleteBookError::CopiesStillBorrowed { borrowed });
    }
    Ok(())
}

/// 純粋関数：1冊貸し出す
///
/// 副作用なし。在庫を1減らしたBookを返す。
pub fn lend_copy(book: &Book) -> Result<Book, BorrowBookError> {
    if !book.is_available() {
        return Err(BorrowBookError::NoCopiesAvailable);
    }
    Ok(Book {
        total_copies: book.total_copies - 1,
        ..book.clone()
    })
}

/// 純粋関数：1冊戻す
///
/// 在庫を1増やす。冊数更新で最大値が引き上げられた後の返却では
/// total_copies が original_copies を超えうるため、その場合は最大値も追従させる。
///
/// # エラー
/// - `CopyCountOverflow`: 在庫数が既に u32::MAX に達している
pub fn restore_copy(book: &Book) -> Result<Book, ReturnBookError> {
    let total_copies = book
        .total_copies
        .checked_add(1)
        .ok_or(ReturnBookError::CopyCountOverflow)?;
    Ok(Book {
        total_copies,
        original_copies: book.original_copies.max(total_copies),
        ..book.clone()
    })
}

/// 純粋関数：検索条件に一致するか
///
/// `query_lower` は呼び出し側で小文字化済みであること。
pub fn matches(book: &Book, query_lower: &str, field: SearchField) -> bool {
    let target = match field {
        SearchField::Title => &book.title,
        SearchField::Author => &book.author,
    };
    target.to_lowercase().contains(query_lower)
}
