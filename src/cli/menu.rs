use std::io::{self, BufRead, Write};

use crate::application::catalog::Catalog;
use crate::domain::{Genre, UpdateBook, UpdateMember};

use super::display::{display_books, display_members};

/// 対話メニューを実行する
///
/// 入力が尽きる（EOF）か "0" が選ばれるまで繰り返す。
/// 各操作の後に書籍一覧と会員一覧を表示する。
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, input: R, output: W) -> io::Result<()> {
    let mut session = Session {
        catalog,
        input,
        output,
    };

    loop {
        match session.step() {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }

    writeln!(session.output, "Goodbye!")
}

struct Session<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// 1回分のメニュー操作。終了が選ばれたら false を返す
    fn step(&mut self) -> io::Result<bool> {
        self.print_menu()?;
        let choice = self.prompt("Select an option (0-9): ")?;

        let succeeded = match choice.as_str() {
            "0" => return Ok(false),
            "1" => self.add_book()?,
            "2" => self.add_member()?,
            "3" => self.search_books()?,
            "4" => self.update_book()?,
            "5" => self.update_member()?,
            "6" => self.delete_book()?,
            "7" => self.delete_member()?,
            "8" => self.borrow_book()?,
            "9" => self.return_book()?,
            _ => {
                writeln!(self.output, "Invalid option. Please choose 0-9.")?;
                return Ok(true);
            }
        };
        tracing::trace!(choice, succeeded, "menu option handled");

        display_books(self.catalog, &mut self.output)?;
        display_members(self.catalog, &mut self.output)?;
        Ok(true)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Welcome to the Smart Library System ---")?;
        for line in [
            "1. Add Book",
            "2. Add Member",
            "3. Search Books",
            "4. Update Book",
            "5. Update Member",
            "6. Delete Book",
            "7. Delete Member",
            "8. Borrow Book",
            "9. Return Book",
            "0. Exit",
        ] {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    // ========================================================================
    // Options
    // ========================================================================

    fn add_book(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Add Book ---")?;
        let genres = genre_list();
        let isbn = self.prompt("Enter ISBN (e.g., SL001): ")?;
        let title = self.prompt("Enter Title (e.g., Intro to Python): ")?;
        let author = self.prompt("Enter Author (e.g., Julius Kargbo): ")?;
        let genre = self.prompt(&format!("Enter Genre [{}]: ", genres))?;
        let total_copies = self.prompt_int("Enter Total Copies (e.g., 5): ")?;

        let ok = self
            .catalog
            .add_book(&isbn, &title, &author, &genre, total_copies);
        self.outcome(
            ok,
            "Book added successfully!",
            "Failed to add book. Check inputs, genre validity, or duplicate ISBN.",
        )
    }

    fn add_member(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Add Member ---")?;
        let member_id = self.prompt("Enter Member ID (e.g., M001): ")?;
        let name = self.prompt("Enter Name (e.g., John Doe): ")?;
        let email = self.prompt("Enter Email (e.g., john@example.com): ")?;

        let ok = self.catalog.add_member(&member_id, &name, &email);
        self.outcome(
            ok,
            "Member added successfully!",
            "Failed to add member. Check inputs, email format, or duplicate Member ID.",
        )
    }

    fn search_books(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Search Books ---")?;
        let query = self.prompt("Enter search query (e.g., Python): ")?;
        let by = self.prompt("Search by ('title' or 'author', default='title'): ")?;

        let found = self.catalog.search_books(&query, &by);
        self.outcome(found, "Book(s) found!", "No books matched your search.")
    }

    fn update_book(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Update Book ---")?;
        writeln!(
            self.output,
            "Only the first field you fill in is applied. Leave blank to skip."
        )?;
        let isbn = self.prompt("Enter ISBN of book to update: ")?;
        let mut cmd = UpdateBook::new(isbn);
        cmd.title = self.prompt_optional("New Title (leave blank to skip): ")?;
        cmd.author = self.prompt_optional("New Author (leave blank to skip): ")?;
        let genre_prompt = format!("New Genre [{}] (leave blank to skip): ", genre_list());
        cmd.genre = self.prompt_optional(&genre_prompt)?;
        cmd.total_copies = self.prompt_optional_int("New Total Copies (leave blank to skip): ")?;

        let ok = self.catalog.update_book(cmd);
        self.outcome(
            ok,
            "Book updated successfully!",
            "Failed to update book. Check ISBN, genre validity, or inputs.",
        )
    }

    fn update_member(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Update Member ---")?;
        let member_id = self.prompt("Enter Member ID to update: ")?;
        let mut cmd = UpdateMember::new(member_id);
        cmd.name = self.prompt_optional("New Name (leave blank to skip): ")?;
        cmd.email = self.prompt_optional("New Email (leave blank to skip): ")?;

        let ok = self.catalog.update_member(cmd);
        self.outcome(
            ok,
            "Member updated successfully!",
            "Failed to update member. Check Member ID or email format.",
        )
    }

    fn delete_book(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Delete Book ---")?;
        let isbn = self.prompt("Enter ISBN of book to delete: ")?;

        let ok = self.catalog.delete_book(&isbn);
        self.outcome(
            ok,
            "Book deleted successfully!",
            "Failed to delete book. It may have borrowed copies or invalid ISBN.",
        )
    }

    fn delete_member(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Delete Member ---")?;
        let member_id = self.prompt("Enter Member ID to delete: ")?;

        let ok = self.catalog.delete_member(&member_id);
        self.outcome(
            ok,
            "Member deleted successfully!",
            "Failed to delete member. They may have borrowed books or invalid ID.",
        )
    }

    fn borrow_book(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Borrow Book ---")?;
        let isbn = self.prompt("Enter ISBN to borrow: ")?;
        let member_id = self.prompt("Enter Member ID: ")?;

        let ok = self.catalog.borrow_book(&isbn, &member_id);
        self.outcome(
            ok,
            "Book borrowed successfully!",
            "Failed to borrow book. Check availability, member ID, or borrowing limits.",
        )
    }

    fn return_book(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Return Book ---")?;
        let isbn = self.prompt("Enter ISBN to return: ")?;
        let member_id = self.prompt("Enter Member ID: ")?;

        let ok = self.catalog.return_book(&isbn, &member_id);
        self.outcome(
            ok,
            "Book returned successfully!",
            "Failed to return book. Check ISBN, member ID, or borrowing record.",
        )
    }

    // ========================================================================
    // Input helpers
    // ========================================================================

    fn outcome(&mut self, ok: bool, success: &str, failure: &str) -> io::Result<bool> {
        writeln!(self.output, "{}", if ok { success } else { failure })?;
        Ok(ok)
    }

    /// 1行読み込み、前後の空白を除いて返す。EOF は `UnexpectedEof` になる
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        Ok(line.trim().to_string())
    }

    /// 空行は未指定として None を返す
    fn prompt_optional(&mut self, label: &str) -> io::Result<Option<String>> {
        let value = self.prompt(label)?;
        Ok((!value.is_empty()).then_some(value))
    }

    /// 整数として読めるまで聞き直す
    fn prompt_int(&mut self, label: &str) -> io::Result<i64> {
        loop {
            let value = self.prompt(label)?;
            match value.parse() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Oops! This field needs an integer. Try again.")?,
            }
        }
    }

    fn prompt_optional_int(&mut self, label: &str) -> io::Result<Option<i64>> {
        loop {
            let value = self.prompt(label)?;
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Oops! This field needs an integer. Try again.")?,
            }
        }
    }
}

fn genre_list() -> String {
    Genre::ALL
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
