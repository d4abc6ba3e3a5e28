use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// ISBN - 書籍の一意キー
///
/// 形式の制約はなく、任意の文字列を受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 会員ID - 会員の一意キー
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ジャンルのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreError {
    /// 定義済みジャンルに含まれない
    Unknown(String),
}

/// ジャンル
///
/// 不変条件：定義済みの5ジャンルのいずれか。
/// 文字列との比較は大文字小文字を区別する（"fiction" は不可）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Mystery,
    Biography,
}

impl Genre {
    /// 定義済みジャンル（表示順）
    pub const ALL: [Genre; 5] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Mystery,
        Genre::Biography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::SciFi => "Sci-Fi",
            Genre::Mystery => "Mystery",
            Genre::Biography => "Biography",
        }
    }
}

impl FromStr for Genre {
    type Err = GenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| GenreError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 冊数のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyCountError {
    /// 負の冊数
    Negative(i64),
    /// 表現可能な上限を超えた
    TooLarge(i64),
}

/// 冊数
///
/// 不変条件：0以上。
/// 入力は符号付き整数で受け取り、負数はここで弾く。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyCount(u32);

impl CopyCount {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for CopyCount {
    type Error = CopyCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(CopyCountError::Negative(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| CopyCountError::TooLarge(value))
    }
}

/// 会員名のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// 空文字または空白のみ
    Blank,
}

/// 会員名
///
/// 不変条件：前後の空白を除いて1文字以上。値そのものはトリムせず保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberName(String);

impl MemberName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for MemberName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(NameError::Blank);
        }
        Ok(Self(value.to_string()))
    }
}

/// メールアドレスのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// '@' を含まない
    MissingAt,
    /// '.' を含まない
    MissingDot,
}

/// メールアドレス
///
/// 不変条件：'@' と '.' の両方を含む。それ以上の形式検査は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.contains('@') {
            return Err(EmailError::MissingAt);
        }
        if !value.contains('.') {
            return Err(EmailError::MissingDot);
        }
        Ok(Self(value.to_string()))
    }
}

/// 検索対象フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// 検索対象の指定文字列を解釈する
    ///
    /// "author"（大文字小文字を区別しない）以外はすべてタイトル検索にフォールバックする。
    pub fn from_by(by: &str) -> Self {
        if by.eq_ignore_ascii_case("author") {
            SearchField::Author
        } else {
            SearchField::Title
        }
    }
}
