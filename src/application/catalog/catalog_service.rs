use crate::domain::{
    self, CopyCount, Email, Genre, Isbn, MemberId, MemberName, SearchField, UpdateBook,
    UpdateMember, book::Book, member::Member,
};

use super::errors::{CatalogError, Result, book_delete_error, member_delete_error};

/// 蔵書サービス
///
/// 書籍と会員の2つのコレクションを排他的に所有し、操作経由でのみ変更を許す。
/// 各操作は「検証 → 新しい状態の計算 → 反映」の順で行い、失敗時は何も変更しない。
///
/// 公開操作は成功/失敗を bool で返す。失敗原因は `CatalogError` として
/// debug ログに残るが、呼び出し側には区別して返さない。
///
/// コレクションは登録順を保持し、検索はすべて線形走査で行う。
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    members: Vec<Member>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// 登録順の書籍一覧
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// 登録順の会員一覧
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn.as_str() == isbn)
    }

    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.member_id.as_str() == member_id)
    }

    /// 検索条件に一致する書籍を登録順に返す
    ///
    /// `by` が "author" ならば著者、それ以外はタイトルを対象に
    /// 大文字小文字を区別しない部分一致で検索する。
    pub fn matching_books(&self, query: &str, by: &str) -> Vec<&Book> {
        let field = SearchField::from_by(by);
        let query_lower = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| domain::book::matches(b, &query_lower, field))
            .collect()
    }

    /// 一致する書籍が1冊以上あれば true
    ///
    /// どの書籍が一致したかは返さない。一覧が必要な場合は `matching_books` を使う。
    pub fn search_books(&self, query: &str, by: &str) -> bool {
        let found = !self.matching_books(query, by).is_empty();
        tracing::debug!(query, by, found, "search_books");
        found
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// 書籍を登録する
    ///
    /// ビジネスルール：
    /// - ISBNが未登録であること
    /// - ジャンルが定義済みであること
    /// - 冊数が0以上であること
    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
        total_copies: i64,
    ) -> bool {
        report(
            "add_book",
            self.try_add_book(isbn, title, author, genre, total_copies),
        )
    }

    /// 会員を登録する
    ///
    /// ビジネスルール：
    /// - 会員IDが未登録であること
    /// - 会員名が空でないこと
    /// - メールアドレスが '@' と '.' を含むこと
    pub fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> bool {
        report("add_member", self.try_add_member(member_id, name, email))
    }

    /// 書籍情報を更新する
    ///
    /// 最初に指定されたフィールドのみ適用する（`UpdateBook` を参照）。
    pub fn update_book(&mut self, cmd: UpdateBook) -> bool {
        report("update_book", self.try_update_book(cmd))
    }

    /// 会員情報を更新する
    ///
    /// 最初に指定されたフィールドのみ適用する（`UpdateMember` を参照）。
    pub fn update_member(&mut self, cmd: UpdateMember) -> bool {
        report("update_member", self.try_update_member(cmd))
    }

    /// 貸出中の冊がない書籍を削除する
    pub fn delete_book(&mut self, isbn: &str) -> bool {
        report("delete_book", self.try_delete_book(isbn))
    }

    /// 借りている書籍がない会員を削除する
    pub fn delete_member(&mut self, member_id: &str) -> bool {
        report("delete_member", self.try_delete_member(member_id))
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 書籍と会員が存在すること
    /// - 在庫が1冊以上あること
    /// - 会員の貸出中の冊数が3冊未満であること
    /// - 同じ書籍を重複して借りないこと
    ///
    /// 書籍と会員の新しい状態を両方計算してから反映するため、途中で失敗しても
    /// 片方だけが更新されることはない。
    pub fn borrow_book(&mut self, isbn: &str, member_id: &str) -> bool {
        report("borrow_book", self.try_borrow_book(isbn, member_id))
    }

    /// 書籍を返却する
    pub fn return_book(&mut self, isbn: &str, member_id: &str) -> bool {
        report("return_book", self.try_return_book(isbn, member_id))
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn book_index(&self, isbn: &str) -> Result<usize> {
        self.books
            .iter()
            .position(|b| b.isbn.as_str() == isbn)
            .ok_or_else(|| CatalogError::BookNotFound(isbn.to_string()))
    }

    fn member_index(&self, member_id: &str) -> Result<usize> {
        self.members
            .iter()
            .position(|m| m.member_id.as_str() == member_id)
            .ok_or_else(|| CatalogError::MemberNotFound(member_id.to_string()))
    }

    fn try_add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
        total_copies: i64,
    ) -> Result<()> {
        let copies = CopyCount::try_from(total_copies)?;
        let genre: Genre = genre.parse()?;
        if self.book(isbn).is_some() {
            return Err(CatalogError::BookAlreadyExists(isbn.to_string()));
        }

        let book = domain::book::register_book(
            Isbn::new(isbn),
            title.to_string(),
            author.to_string(),
            genre,
            copies,
        );
        self.books.push(book);

        tracing::info!(isbn, copies = copies.value(), "book added");
        Ok(())
    }

    fn try_add_member(&mut self, member_id: &str, name: &str, email: &str) -> Result<()> {
        let name = MemberName::try_from(name)?;
        let email = Email::try_from(email)?;
        if self.member(member_id).is_some() {
            return Err(CatalogError::MemberAlreadyExists(member_id.to_string()));
        }

        let member = domain::member::register_member(MemberId::new(member_id), name, email);
        self.members.push(member);

        tracing::info!(member_id, "member added");
        Ok(())
    }

    fn try_update_book(&mut self, cmd: UpdateBook) -> Result<()> {
        let index = self.book_index(&cmd.isbn)?;
        let isbn = cmd.isbn.clone();

        let change = cmd.into_change()?;
        let updated = domain::book::update_book(&self.books[index], change)?;
        self.books[index] = updated;

        tracing::info!(isbn, "book updated");
        Ok(())
    }

    fn try_update_member(&mut self, cmd: UpdateMember) -> Result<()> {
        let index = self.member_index(&cmd.member_id)?;
        let member_id = cmd.member_id.clone();

        let change = cmd.into_change()?;
        let updated = domain::member::update_member(&self.members[index], change);
        self.members[index] = updated;

        tracing::info!(member_id, "member updated");
        Ok(())
    }

    fn try_delete_book(&mut self, isbn: &str) -> Result<()> {
        let index = self.book_index(isbn)?;
        domain::book::ensure_deletable(&self.books[index])
            .map_err(|e| book_delete_error(isbn, e))?;

        self.books.remove(index);

        tracing::info!(isbn, "book deleted");
        Ok(())
    }

    fn try_delete_member(&mut self, member_id: &str) -> Result<()> {
        let index = self.member_index(member_id)?;
        domain::member::ensure_deletable(&self.members[index])
            .map_err(|e| member_delete_error(member_id, e))?;

        self.members.remove(index);

        tracing::info!(member_id, "member deleted");
        Ok(())
    }

    fn try_borrow_book(&mut self, isbn: &str, member_id: &str) -> Result<()> {
        let book_index = self.book_index(isbn)?;
        let member_index = self.member_index(member_id)?;

        let book = domain::book::lend_copy(&self.books[book_index])?;
        let member = domain::member::check_out(&self.members[member_index], &book.isbn)?;

        let remaining = book.total_copies;
        self.books[book_index] = book;
        self.members[member_index] = member;

        tracing::info!(isbn, member_id, remaining, "book borrowed");
        Ok(())
    }

    fn try_return_book(&mut self, isbn: &str, member_id: &str) -> Result<()> {
        let book_index = self.book_index(isbn)?;
        let member_index = self.member_index(member_id)?;

        let member = domain::member::check_in(&self.members[member_index], &Isbn::new(isbn))?;
        let book = domain::book::restore_copy(&self.books[book_index])?;

        let remaining = book.total_copies;
        self.books[book_index] = book;
        self.members[member_index] = member;

        tracing::info!(isbn, member_id, remaining, "book returned");
        Ok(())
    }
}

/// 操作結果を bool に畳み込み、失敗原因をログに残す
fn report(operation: &'static str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(operation, error = %err, "catalog operation rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_book_and_member() -> Catalog {
        let mut catalog = Catalog::new();
        assert!(catalog.add_book("SL001", "T", "A", "Fiction", 5));
        assert!(catalog.add_member("M1", "N", "n@e.com"));
        catalog
    }

    // 失敗原因の分類（公開APIでは bool に畳まれる）

    #[test]
    fn test_add_book_errors_are_classified() {
        let mut catalog = catalog_with_book_and_member();
        assert_eq!(
            catalog.try_add_book("SL001", "T", "A", "Fiction", 1),
            Err(CatalogError::BookAlreadyExists("SL001".to_string()))
        );
        assert_eq!(
            catalog.try_add_book("SL006", "T", "A", "Article", 1),
            Err(CatalogError::InvalidGenre("Article".to_string()))
        );
        assert_eq!(
            catalog.try_add_book("SL007", "T", "A", "Fiction", -1),
            Err(CatalogError::InvalidCopyCount(-1))
        );
    }

    #[test]
    fn test_add_member_errors_are_classified() {
        let mut catalog = catalog_with_book_and_member();
        assert_eq!(
            catalog.try_add_member("M1", "Other", "o@e.com"),
            Err(CatalogError::MemberAlreadyExists("M1".to_string()))
        );
        assert_eq!(
            catalog.try_add_member("M2", " ", "o@e.com"),
            Err(CatalogError::InvalidName)
        );
        assert_eq!(
            catalog.try_add_member("M2", "Other", "oe.com"),
            Err(CatalogError::EmailMissingAt)
        );
        assert_eq!(
            catalog.try_add_member("M2", "Other", "o@ecom"),
            Err(CatalogError::EmailMissingDot)
        );
    }

    #[test]
    fn test_borrow_errors_are_classified() {
        let mut catalog = catalog_with_book_and_member();
        assert_eq!(
            catalog.try_borrow_book("SL999", "M1"),
            Err(CatalogError::BookNotFound("SL999".to_string()))
        );
        assert_eq!(
            catalog.try_borrow_book("SL001", "M9"),
            Err(CatalogError::MemberNotFound("M9".to_string()))
        );

        catalog.try_borrow_book("SL001", "M1").unwrap();
        assert_eq!(
            catalog.try_borrow_book("SL001", "M1"),
            Err(CatalogError::AlreadyBorrowed)
        );
    }

    #[test]
    fn test_borrow_without_stock_is_classified() {
        let mut catalog = Catalog::new();
        catalog
            .try_add_book("SL010", "T", "A", "Mystery", 0)
            .unwrap();
        catalog.try_add_member("M1", "N", "n@e.com").unwrap();
        assert_eq!(
            catalog.try_borrow_book("SL010", "M1"),
            Err(CatalogError::NoCopiesAvailable)
        );
    }

    #[test]
    fn test_delete_errors_carry_key() {
        let mut catalog = catalog_with_book_and_member();
        catalog.try_borrow_book("SL001", "M1").unwrap();

        assert_eq!(
            catalog.try_delete_book("SL001"),
            Err(CatalogError::CopiesStillBorrowed {
                isbn: "SL001".to_string(),
                borrowed: 1
            })
        );
        assert_eq!(
            catalog.try_delete_member("M1"),
            Err(CatalogError::MemberHasBorrowedBooks {
                member_id: "M1".to_string(),
                held: 1
            })
        );
    }

    #[test]
    fn test_update_book_unknown_isbn_checked_before_fields() {
        let mut catalog = catalog_with_book_and_member();
        assert_eq!(
            catalog.try_update_book(UpdateBook::new("SL008")),
            Err(CatalogError::BookNotFound("SL008".to_string()))
        );
        assert_eq!(
            catalog.try_update_book(UpdateBook::new("SL001")),
            Err(CatalogError::NoFieldToUpdate)
        );
    }

    #[test]
    fn test_return_errors_are_classified() {
        let mut catalog = catalog_with_book_and_member();
        assert_eq!(
            catalog.try_return_book("SL001", "M1"),
            Err(CatalogError::NotBorrowedByMember)
        );
    }

    #[test]
    fn test_return_at_max_copies_is_classified_and_changes_nothing() {
        let max = i64::from(u32::MAX);
        let mut catalog = Catalog::new();
        catalog
            .try_add_book("BIG", "T", "A", "Fiction", max)
            .unwrap();
        catalog.try_add_member("M1", "N", "n@e.com").unwrap();
        catalog.try_borrow_book("BIG", "M1").unwrap();
        catalog
            .try_update_book(UpdateBook::new("BIG").total_copies(max))
            .unwrap();

        assert_eq!(
            catalog.try_return_book("BIG", "M1"),
            Err(CatalogError::CopyCountOverflow)
        );
        assert_eq!(catalog.book("BIG").unwrap().total_copies, u32::MAX);
        assert_eq!(catalog.member("M1").unwrap().borrowed_books.len(), 1);
    }

    #[test]
    fn test_failed_borrow_leaves_book_untouched() {
        let mut catalog = catalog_with_book_and_member();
        for code in ["SL002", "SL003", "SL004"] {
            assert!(catalog.add_book(code, "T", "A", "Fiction", 1));
            assert!(catalog.borrow_book(code, "M1"));
        }

        assert!(!catalog.borrow_book("SL001", "M1"));
        assert_eq!(catalog.book("SL001").unwrap().total_copies, 5);
        assert_eq!(catalog.member("M1").unwrap().borrowed_books.len(), 3);
    }

    #[test]
    fn test_matching_books_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add_book("B2", "Rust in Action", "Tim", "Non-Fiction", 1);
        catalog.add_book("B1", "Programming Rust", "Jim", "Non-Fiction", 1);
        catalog.add_book("B3", "Dune", "Frank", "Sci-Fi", 1);

        let isbns: Vec<&str> = catalog
            .matching_books("RUST", "title")
            .iter()
            .map(|b| b.isbn.as_str())
            .collect();
        assert_eq!(isbns, vec!["B2", "B1"]);
    }
}
