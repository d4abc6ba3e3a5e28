use thiserror::Error;

use crate::domain::{
    BorrowBookError, CopyCountError, DeleteBookError, DeleteMemberError, EmailError, GenreError,
    NameError, ReturnBookError, UpdateBookError, UpdateMemberError,
};

/// 蔵書管理アプリケーション層のエラー
///
/// 呼び出し側には bool としてしか見えないが、ログで原因を追えるよう分類しておく。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// ISBNが既に登録されている
    #[error("Book {0} already exists")]
    BookAlreadyExists(String),

    /// 会員IDが既に登録されている
    #[error("Member {0} already exists")]
    MemberAlreadyExists(String),

    /// 書籍が存在しない
    #[error("Book {0} not found")]
    BookNotFound(String),

    /// 会員が存在しない
    #[error("Member {0} not found")]
    MemberNotFound(String),

    /// 定義済みジャンルではない
    #[error("Unknown genre: {0}")]
    InvalidGenre(String),

    /// 冊数が範囲外
    #[error("Invalid copy count: {0}")]
    InvalidCopyCount(i64),

    /// 会員名が空
    #[error("Member name must not be blank")]
    InvalidName,

    /// メールアドレスに '@' がない
    #[error("Email must contain '@'")]
    EmailMissingAt,

    /// メールアドレスに '.' がない
    #[error("Email must contain '.'")]
    EmailMissingDot,

    /// 更新するフィールドが指定されていない
    #[error("No field to update")]
    NoFieldToUpdate,

    /// 貸出中の冊数を下回る冊数への変更
    #[error("Cannot set copies to {requested}: {borrowed} copies are borrowed")]
    CopiesBelowBorrowed { requested: u32, borrowed: u32 },

    /// 貸出中の冊がある書籍の削除
    #[error("Book {isbn} still has {borrowed} borrowed copies")]
    CopiesStillBorrowed { isbn: String, borrowed: u32 },

    /// 借りている書籍がある会員の削除
    #[error("Member {member_id} still holds {held} books")]
    MemberHasBorrowedBooks { member_id: String, held: usize },

    /// 在庫なし
    #[error("No copies available")]
    NoCopiesAvailable,

    /// 貸出上限（3冊）に達している
    #[error("Borrow limit reached (max 3 books)")]
    BorrowLimitReached,

    /// 同じ書籍を既に借りている
    #[error("Book already borrowed by this member")]
    AlreadyBorrowed,

    /// この会員は当該書籍を借りていない
    #[error("Book not borrowed by this member")]
    NotBorrowedByMember,

    /// 返却で在庫数が上限を超える
    #[error("Copy count would overflow")]
    CopyCountOverflow,
}

impl From<GenreError> for CatalogError {
    fn from(err: GenreError) -> Self {
        match err {
            GenreError::Unknown(genre) => CatalogError::InvalidGenre(genre),
        }
    }
}

impl From<CopyCountError> for CatalogError {
    fn from(err: CopyCountError) -> Self {
        match err {
            CopyCountError::Negative(value) | CopyCountError::TooLarge(value) => {
                CatalogError::InvalidCopyCount(value)
            }
        }
    }
}

impl From<NameError> for CatalogError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::Blank => CatalogError::InvalidName,
        }
    }
}

impl From<EmailError> for CatalogError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::MissingAt => CatalogError::EmailMissingAt,
            EmailError::MissingDot => CatalogError::EmailMissingDot,
        }
    }
}

impl From<UpdateBookError> for CatalogError {
    fn from(err: UpdateBookError) -> Self {
        match err {
            UpdateBookError::NothingToUpdate => CatalogError::NoFieldToUpdate,
            UpdateBookError::InvalidGenre(e) => e.into(),
            UpdateBookError::InvalidCopyCount(e) => e.into(),
            UpdateBookError::BelowBorrowedCount {
                requested,
                borrowed,
            } => CatalogError::CopiesBelowBorrowed {
                requested,
                borrowed,
            },
        }
    }
}

impl From<UpdateMemberError> for CatalogError {
    fn from(err: UpdateMemberError) -> Self {
        match err {
            UpdateMemberError::NothingToUpdate => CatalogError::NoFieldToUpdate,
            UpdateMemberError::InvalidName(e) => e.into(),
            UpdateMemberError::InvalidEmail(e) => e.into(),
        }
    }
}

impl From<BorrowBookError> for CatalogError {
    fn from(err: BorrowBookError) -> Self {
        match err {
            BorrowBookError::NoCopiesAvailable => CatalogError::NoCopiesAvailable,
            BorrowBookError::LimitReached => CatalogError::BorrowLimitReached,
            BorrowBookError::AlreadyBorrowed => CatalogError::AlreadyBorrowed,
        }
    }
}

impl From<ReturnBookError> for CatalogError {
    fn from(err: ReturnBookError) -> Self {
        match err {
            ReturnBookError::NotBorrowed => CatalogError::NotBorrowedByMember,
            ReturnBookError::CopyCountOverflow => CatalogError::CopyCountOverflow,
        }
    }
}

/// 削除系のエラーは対象キーを付けて変換する
pub(super) fn book_delete_error(isbn: &str, err: DeleteBookError) -> CatalogError {
    match err {
        DeleteBookError::CopiesStillBorrowed { borrowed } => CatalogError::CopiesStillBorrowed {
            isbn: isbn.to_string(),
            borrowed,
        },
    }
}

pub(super) fn member_delete_error(member_id: &str, err: DeleteMemberError) -> CatalogError {
    match err {
        DeleteMemberError::StillHoldingBooks { held } => CatalogError::MemberHasBorrowedBooks {
            member_id: member_id.to_string(),
            held,
        },
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
