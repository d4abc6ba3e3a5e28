use serde::Serialize;

use super::{
    BorrowBookError, DeleteMemberError, Email, Isbn, MemberChange, MemberId, MemberName,
    ReturnBookError,
};

/// 会員1人あたりの最大貸出冊数
pub const MAX_BORROWED_BOOKS: usize = 3;

/// Member集約 - 利用者と現在借りている書籍
///
/// 不変条件：borrowed_books は最大3件、重複なし。借りた順に並ぶ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: MemberName,
    pub email: Email,
    pub borrowed_books: Vec<Isbn>,
}

impl Member {
    /// 指定の書籍を借りているか
    pub fn holds(&self, isbn: &Isbn) -> bool {
        self.borrowed_books.contains(isbn)
    }

    /// 貸出上限に達しているか
    pub fn at_borrow_limit(&self) -> bool {
        self.borrowed_books.len() >= MAX_BORROWED_BOOKS
    }
}

/// 純粋関数：会員を登録する
pub fn register_member(member_id: MemberId, name: MemberName, email: Email) -> Member {
    Member {
        member_id,
        name,
        email,
        borrowed_books: Vec::new(),
    }
}

/// 純粋関数：会員情報を更新する
///
/// 変更は検証済みのため失敗しない。
pub fn update_member(member: &Member, change: MemberChange) -> Member {
    match change {
        MemberChange::Name(name) => Member {
            name,
            ..member.clone()
        },
        MemberChange::Email(email) => Member {
            email,
            ..member.clone()
        },
    }
}

/// 純粋関数：削除可能か確認する
pub fn ensure_deletable(member: &Member) -> Result<(), DeleteMemberError> {
    if !member.borrowed_books.is_empty() {
        return Err(DeleteMemberError::StillHoldingBooks {
            held: member.borrowed_books.len(),
        });
    }
    Ok(())
}

/// 純粋関数：貸出を記録する
///
/// ビジネスルール：
/// - 同時に借りられるのは3冊まで
/// - 同じ書籍を重複して借りることはできない
pub fn check_out(member: &Member, isbn: &Isbn) -> Result<Member, BorrowBookError> {
    if member.at_borrow_limit() {
        return Err(BorrowBookError::LimitReached);
    }
    if member.holds(isbn) {
        return Err(BorrowBookError::AlreadyBorrowed);
    }

    let mut borrowed_books = member.borrowed_books.clone();
    borrowed_books.push(isbn.clone());

    Ok(Member {
        borrowed_books,
        ..member.clone()
    })
}

/// 純粋関数：返却を記録する
pub fn check_in(member: &Member, isbn: &Isbn) -> Result<Member, ReturnBookError> {
    if !member.holds(isbn) {
        return Err(ReturnBookError::NotBorrowed);
    }

    let borrowed_books = member
        .borrowed_books
        .iter()
        .filter(|held| *held != isbn)
        .cloned()
        .collect();

    Ok(Member {
        borrowed_books,
        ..member.clone()
    })
}
