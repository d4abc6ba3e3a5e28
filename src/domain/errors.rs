use super::{CopyCountError, EmailError, GenreError, NameError};

/// 書籍更新のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateBookError {
    /// 更新するフィールドが指定されていない
    NothingToUpdate,
    /// 定義済みジャンルではない
    InvalidGenre(GenreError),
    /// 冊数が不正（負数など）
    InvalidCopyCount(CopyCountError),
    /// 貸出中の冊数を下回る冊数は設定できない
    BelowBorrowedCount { requested: u32, borrowed: u32 },
}

impl From<GenreError> for UpdateBookError {
    fn from(err: GenreError) -> Self {
        UpdateBookError::InvalidGenre(err)
    }
}

impl From<CopyCountError> for UpdateBookError {
    fn from(err: CopyCountError) -> Self {
        UpdateBookError::InvalidCopyCount(err)
    }
}

/// 会員更新のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateMemberError {
    /// 更新するフィールドが指定されていない
    NothingToUpdate,
    /// 会員名が空
    InvalidName(NameError),
    /// メールアドレスの形式が不正
    InvalidEmail(EmailError),
}

impl From<NameError> for UpdateMemberError {
    fn from(err: NameError) -> Self {
        UpdateMemberError::InvalidName(err)
    }
}

impl From<EmailError> for UpdateMemberError {
    fn from(err: EmailError) -> Self {
        UpdateMemberError::InvalidEmail(err)
    }
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 在庫なし
    NoCopiesAvailable,
    /// 貸出上限（3冊）に達している
    LimitReached,
    /// 同じ書籍を既に借りている
    AlreadyBorrowed,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// この会員は当該書籍を借りていない
    NotBorrowed,
    /// 在庫数が上限（u32::MAX）を超える
    CopyCountOverflow,
}

/// 書籍削除のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteBookError {
    /// 貸出中の冊がある
    CopiesStillBorrowed { borrowed: u32 },
}

/// 会員削除のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteMemberError {
    /// 借りている書籍がある
    StillHoldingBooks { held: usize },
}
