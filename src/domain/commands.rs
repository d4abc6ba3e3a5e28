use super::{CopyCount, Email, Genre, MemberName, UpdateBookError, UpdateMemberError};

/// 書籍に適用する単一の変更（検証済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookChange {
    Title(String),
    Author(String),
    Genre(Genre),
    TotalCopies(CopyCount),
}

/// 会員に適用する単一の変更（検証済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberChange {
    Name(MemberName),
    Email(Email),
}

/// コマンド：書籍情報を更新する
///
/// 任意フィールドは title, author, genre, total_copies の順に評価され、
/// **最初に指定されたフィールドだけが適用される**。残りは指定されていても無視する。
/// 全フィールドを一括適用するパッチではない点に注意（従来の挙動を保持している）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateBook {
    pub isbn: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub total_copies: Option<i64>,
}

impl UpdateBook {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn total_copies(mut self, total_copies: i64) -> Self {
        self.total_copies = Some(total_copies);
        self
    }

    /// 最初に指定されたフィールドを検証済みの変更に変換する
    ///
    /// # エラー
    /// - `NothingToUpdate`: どのフィールドも指定されていない
    /// - `InvalidGenre` / `InvalidCopyCount`: 選ばれたフィールドの値が不正
    ///
    /// 後続フィールドの値は検証しない（選ばれなかったフィールドは不正でも失敗しない）。
    pub fn into_change(self) -> Result<BookChange, UpdateBookError> {
        if let Some(title) = self.title {
            return Ok(BookChange::Title(title));
        }
        if let Some(author) = self.author {
            return Ok(BookChange::Author(author));
        }
        if let Some(genre) = self.genre {
            return Ok(BookChange::Genre(genre.parse()?));
        }
        if let Some(total_copies) = self.total_copies {
            return Ok(BookChange::TotalCopies(CopyCount::try_from(total_copies)?));
        }
        Err(UpdateBookError::NothingToUpdate)
    }
}

/// コマンド：会員情報を更新する
///
/// name, email の順に評価し、最初に指定されたフィールドだけを適用する。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateMember {
    pub member_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateMember {
    pub fn new(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// 最初に指定されたフィールドを検証済みの変更に変換する
    pub fn into_change(self) -> Result<MemberChange, UpdateMemberError> {
        if let Some(name) = self.name {
            return Ok(MemberChange::Name(MemberName::try_from(name.as_str())?));
        }
        if let Some(email) = self.email {
            return Ok(MemberChange::Email(Email::try_from(email.as_str())?));
        }
        Err(UpdateMemberError::NothingToUpdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CopyCountError, EmailError, GenreError, NameError};

    #[test]
    fn test_update_book_title_wins_over_author() {
        let change = UpdateBook::new("SL001")
            .title("X")
            .author("Y")
            .into_change()
            .unwrap();
        assert_eq!(change, BookChange::Title("X".to_string()));
    }

    #[test]
    fn test_update_book_author_wins_over_genre_and_copies() {
        let change = UpdateBook::new("SL001")
            .author("Julius Kargbo")
            .genre("Fiction")
            .total_copies(9)
            .into_change()
            .unwrap();
        assert_eq!(change, BookChange::Author("Julius Kargbo".to_string()));
    }

    #[test]
    fn test_update_book_ignores_invalid_later_fields() {
        let change = UpdateBook::new("SL001")
            .genre("Mystery")
            .total_copies(-5)
            .into_change()
            .unwrap();
        assert_eq!(change, BookChange::Genre(Genre::Mystery));
    }

    #[test]
    fn test_update_book_empty_title_is_still_a_change() {
        let change = UpdateBook::new("SL001").title("").into_change().unwrap();
        assert_eq!(change, BookChange::Title(String::new()));
    }

    #[test]
    fn test_update_book_validates_selected_genre() {
        let result = UpdateBook::new("SL002")
            .genre("ScienceFiction")
            .into_change();
        assert_eq!(
            result,
            Err(UpdateBookError::InvalidGenre(GenreError::Unknown(
                "ScienceFiction".to_string()
            )))
        );
    }

    #[test]
    fn test_update_book_validates_selected_copies() {
        let result = UpdateBook::new("SL002").total_copies(-1).into_change();
        assert_eq!(
            result,
            Err(UpdateBookError::InvalidCopyCount(
                CopyCountError::Negative(-1)
            ))
        );
    }

    #[test]
    fn test_update_book_without_fields_fails() {
        let result = UpdateBook::new("SL001").into_change();
        assert_eq!(result, Err(UpdateBookError::NothingToUpdate));
    }

    #[test]
    fn test_update_member_name_wins_over_email() {
        let change = UpdateMember::new("M1")
            .name("New Name")
            .email("not-an-email")
            .into_change()
            .unwrap();
        assert_eq!(
            change,
            MemberChange::Name(MemberName::try_from("New Name").unwrap())
        );
    }

    #[test]
    fn test_update_member_rejects_blank_name_even_with_valid_email() {
        let result = UpdateMember::new("M1")
            .name("")
            .email("valid@example.com")
            .into_change();
        assert_eq!(
            result,
            Err(UpdateMemberError::InvalidName(NameError::Blank))
        );
    }

    #[test]
    fn test_update_member_validates_email() {
        let result = UpdateMember::new("M1")
            .email("fatmatakargbo.com")
            .into_change();
        assert_eq!(
            result,
            Err(UpdateMemberError::InvalidEmail(EmailError::MissingAt))
        );
    }

    #[test]
    fn test_update_member_without_fields_fails() {
        let result = UpdateMember::new("M1").into_change();
        assert_eq!(result, Err(UpdateMemberError::NothingToUpdate));
    }
}
