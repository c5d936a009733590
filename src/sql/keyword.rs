//! Keyword table driving compound merging and line breaking.
//!
//! Every variant is a one to three word phrase. The predicates on [`Keyword`]
//! partition the table into the sets the formatter and checker care about:
//! clause keywords (start a new line), list-breaking clauses (commas break
//! lines), valid statement starts, and the GRANT/REVOKE privilege list
//! exceptions.
//!
//! Design notes:
//! - Phrases are matched against an *upper‑cased*, single-space joined window
//!   via `from_phrase`; the caller does the case folding.
//! - `as_str` is the canonical uppercase form emitted into formatted output.
//! - Changing this table changes formatting output.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // DML
    Select,
    From,
    Where,
    GroupBy,
    OrderBy,
    Having,
    InsertInto,
    Values,
    Update,
    Set,
    Delete,
    // DDL
    CreateTable,
    DropTable,
    AlterTable,
    TruncateTable,
    PrimaryKey,
    ForeignKey,
    References,
    Constraint,
    IfExists,
    NotNull,
    Unique,
    Check,
    // Joins
    Join,
    LeftJoin,
    RightJoin,
    InnerJoin,
    OuterJoin,
    On,
    // Misc
    As,
    Distinct,
    Limit,
    Offset,
    Union,
    All,
    // DCL / TCL
    Grant,
    Revoke,
    To,
    With,
    Option,
    Commit,
    Rollback,
    Savepoint,
    Transaction,
    Begin,
}

impl Keyword {
    /// Every entry of the table, in declaration order.
    pub const ALL: [Self; 45] = [
        Self::Select,
        Self::From,
        Self::Where,
        Self::GroupBy,
        Self::OrderBy,
        Self::Having,
        Self::InsertInto,
        Self::Values,
        Self::Update,
        Self::Set,
        Self::Delete,
        Self::CreateTable,
        Self::DropTable,
        Self::AlterTable,
        Self::TruncateTable,
        Self::PrimaryKey,
        Self::ForeignKey,
        Self::References,
        Self::Constraint,
        Self::IfExists,
        Self::NotNull,
        Self::Unique,
        Self::Check,
        Self::Join,
        Self::LeftJoin,
        Self::RightJoin,
        Self::InnerJoin,
        Self::OuterJoin,
        Self::On,
        Self::As,
        Self::Distinct,
        Self::Limit,
        Self::Offset,
        Self::Union,
        Self::All,
        Self::Grant,
        Self::Revoke,
        Self::To,
        Self::With,
        Self::Option,
        Self::Commit,
        Self::Rollback,
        Self::Savepoint,
        Self::Transaction,
        Self::Begin,
    ];

    /// Longest phrase in the table, in words.
    pub const MAX_WORDS: usize = 3;

    /// Attempt to classify an *upper‑cased*, single-space joined phrase.
    /// Returns `None` if the phrase is not in the table.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let kw = match phrase {
            "SELECT" => Self::Select,
            "FROM" => Self::From,
            "WHERE" => Self::Where,
            "GROUP BY" => Self::GroupBy,
            "ORDER BY" => Self::OrderBy,
            "HAVING" => Self::Having,
            "INSERT INTO" => Self::InsertInto,
            "VALUES" => Self::Values,
            "UPDATE" => Self::Update,
            "SET" => Self::Set,
            "DELETE" => Self::Delete,
            "CREATE TABLE" => Self::CreateTable,
            "DROP TABLE" => Self::DropTable,
            "ALTER TABLE" => Self::AlterTable,
            "TRUNCATE TABLE" => Self::TruncateTable,
            "PRIMARY KEY" => Self::PrimaryKey,
            "FOREIGN KEY" => Self::ForeignKey,
            "REFERENCES" => Self::References,
            "CONSTRAINT" => Self::Constraint,
            "IF EXISTS" => Self::IfExists,
            "NOT NULL" => Self::NotNull,
            "UNIQUE" => Self::Unique,
            "CHECK" => Self::Check,
            "JOIN" => Self::Join,
            "LEFT JOIN" => Self::LeftJoin,
            "RIGHT JOIN" => Self::RightJoin,
            "INNER JOIN" => Self::InnerJoin,
            "OUTER JOIN" => Self::OuterJoin,
            "ON" => Self::On,
            "AS" => Self::As,
            "DISTINCT" => Self::Distinct,
            "LIMIT" => Self::Limit,
            "OFFSET" => Self::Offset,
            "UNION" => Self::Union,
            "ALL" => Self::All,
            "GRANT" => Self::Grant,
            "REVOKE" => Self::Revoke,
            "TO" => Self::To,
            "WITH" => Self::With,
            "OPTION" => Self::Option,
            "COMMIT" => Self::Commit,
            "ROLLBACK" => Self::Rollback,
            "SAVEPOINT" => Self::Savepoint,
            "TRANSACTION" => Self::Transaction,
            "BEGIN" => Self::Begin,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical uppercase form of the phrase.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::OrderBy => "ORDER BY",
            Self::Having => "HAVING",
            Self::InsertInto => "INSERT INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::CreateTable => "CREATE TABLE",
            Self::DropTable => "DROP TABLE",
            Self::AlterTable => "ALTER TABLE",
            Self::TruncateTable => "TRUNCATE TABLE",
            Self::PrimaryKey => "PRIMARY KEY",
            Self::ForeignKey => "FOREIGN KEY",
            Self::References => "REFERENCES",
            Self::Constraint => "CONSTRAINT",
            Self::IfExists => "IF EXISTS",
            Self::NotNull => "NOT NULL",
            Self::Unique => "UNIQUE",
            Self::Check => "CHECK",
            Self::Join => "JOIN",
            Self::LeftJoin => "LEFT JOIN",
            Self::RightJoin => "RIGHT JOIN",
            Self::InnerJoin => "INNER JOIN",
            Self::OuterJoin => "OUTER JOIN",
            Self::On => "ON",
            Self::As => "AS",
            Self::Distinct => "DISTINCT",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Union => "UNION",
            Self::All => "ALL",
            Self::Grant => "GRANT",
            Self::Revoke => "REVOKE",
            Self::To => "TO",
            Self::With => "WITH",
            Self::Option => "OPTION",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::Savepoint => "SAVEPOINT",
            Self::Transaction => "TRANSACTION",
            Self::Begin => "BEGIN",
        }
    }

    /// Clause keywords begin a new formatted line.
    pub const fn is_clause(self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::From
                | Self::Where
                | Self::GroupBy
                | Self::OrderBy
                | Self::Having
                | Self::Values
                | Self::Set
                | Self::InsertInto
                | Self::Update
                | Self::Delete
                | Self::CreateTable
                | Self::DropTable
                | Self::AlterTable
                | Self::TruncateTable
                | Self::Grant
                | Self::Revoke
        )
    }

    /// Clauses whose top-level commas put one item per line.
    pub const fn opens_list(self) -> bool {
        matches!(
            self,
            Self::Select | Self::InsertInto | Self::Values | Self::CreateTable
        )
    }

    pub const fn is_statement_start(self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::InsertInto
                | Self::Update
                | Self::Delete
                | Self::CreateTable
                | Self::DropTable
                | Self::AlterTable
                | Self::TruncateTable
                | Self::Grant
                | Self::Revoke
                | Self::Commit
                | Self::Rollback
                | Self::Begin
        )
    }

    /// GRANT and REVOKE are followed by an inline privilege list.
    pub const fn opens_privilege_list(self) -> bool {
        matches!(self, Self::Grant | Self::Revoke)
    }

    /// Keywords that stay inline inside a privilege list even when they are
    /// clause keywords elsewhere. A bare `INSERT` privilege is not in the
    /// table, so it merges to a plain word and stays inline anyway.
    pub const fn is_privilege(self) -> bool {
        matches!(
            self,
            Self::Select | Self::Update | Self::Delete | Self::All
        )
    }

    /// `ON` and `TO` end a privilege list while staying on the same line.
    pub const fn closes_privilege_list(self) -> bool {
        matches!(self, Self::On | Self::To)
    }

    /// Individual words of the phrase.
    pub fn words(self) -> impl Iterator<Item = &'static str> {
        self.as_str().split(' ')
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_round_trips_for_every_entry() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_phrase(kw.as_str()), Some(kw), "{kw}");
        }
    }

    #[test]
    fn rejects_unknown_or_lowercase_phrases() {
        for w in ["select", "GROUP", "BY", "INSERT", "KEY", "GROUP  BY", "foo"] {
            assert!(
                Keyword::from_phrase(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn phrases_fit_in_merge_window() {
        assert!(Keyword::ALL.iter().all(|kw| kw.words().count() <= Keyword::MAX_WORDS));
    }

    #[test]
    fn clause_keywords() {
        let clauses: Vec<_> = Keyword::ALL
            .into_iter()
            .filter(|kw| kw.is_clause())
            .map(Keyword::as_str)
            .collect();
        assert_eq!(
            clauses,
            [
                "SELECT",
                "FROM",
                "WHERE",
                "GROUP BY",
                "ORDER BY",
                "HAVING",
                "INSERT INTO",
                "VALUES",
                "UPDATE",
                "SET",
                "DELETE",
                "CREATE TABLE",
                "DROP TABLE",
                "ALTER TABLE",
                "TRUNCATE TABLE",
                "GRANT",
                "REVOKE",
            ]
        );
    }

    #[test]
    fn statement_starts() {
        let starts: Vec<_> = Keyword::ALL
            .into_iter()
            .filter(|kw| kw.is_statement_start())
            .map(Keyword::as_str)
            .collect();
        assert_eq!(
            starts,
            [
                "SELECT",
                "INSERT INTO",
                "UPDATE",
                "DELETE",
                "CREATE TABLE",
                "DROP TABLE",
                "ALTER TABLE",
                "TRUNCATE TABLE",
                "GRANT",
                "REVOKE",
                "COMMIT",
                "ROLLBACK",
                "BEGIN",
            ]
        );
    }

    #[test]
    fn list_clauses_are_clauses() {
        for kw in Keyword::ALL.into_iter().filter(|kw| kw.opens_list()) {
            assert!(kw.is_clause(), "{kw} breaks lists but is not a clause");
        }
    }

    #[test]
    fn display_matches_as_str() {
        for kw in Keyword::ALL {
            assert_eq!(kw.to_string(), kw.as_str());
        }
    }
}
