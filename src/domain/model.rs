use serde::{Deserialize, Serialize};
use std::fmt;

/// 上傳檔案的位置 (第一個或第二個輸入)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSlot {
    First,
    Second,
}

impl fmt::Display for InputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSlot::First => write!(f, "first input"),
            InputSlot::Second => write!(f, "second input"),
        }
    }
}

/// The two export schemas the reconciler understands.
///
/// `LinkedIn` rows carry the person's current title and employer, `Bullhorn`
/// rows carry what the CRM has on record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    LinkedIn,
    Bullhorn,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::LinkedIn => write!(f, "LinkedIn"),
            ExportFormat::Bullhorn => write!(f, "Bullhorn"),
        }
    }
}

/// 已解析的表格：標題列加上資料列，欄位順序與檔案一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table, trimming header names and stripping a leading byte-order mark.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell value for `column`; short rows read as blank.
    pub fn cell<'a>(&self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 兩個未標記的輸入表格
#[derive(Debug, Clone, Default)]
pub struct InputPair {
    pub first: RawTable,
    pub second: RawTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Never empty after trimming.
    pub name: String,
    pub title: String,
    pub company: String,
    pub origin: ExportFormat,
}

/// A Bullhorn record linked to its best LinkedIn candidate.
///
/// Side `a` is the LinkedIn (current) value, side `b` the Bullhorn (recorded)
/// value. Titles and companies are lower-cased and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedPair {
    pub anchor_name: String,
    pub matched_name: String,
    pub match_score: u8,
    pub title_a: String,
    pub title_b: String,
    pub company_a: String,
    pub company_b: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRow {
    pub pair: LinkedPair,
    pub company_similarity: u8,
    pub title_similarity: u8,
    pub company_same: bool,
    pub title_same: bool,
}

/// Fuzzy-similarity cut-offs for deciding that two values are "the same".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub company: u32,
    pub title: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            company: 60,
            title: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeBucket {
    NewRoleSameCompany,
    SameRoleNewCompany,
    DifferentRoleAndCompany,
}

impl ChangeBucket {
    pub const ALL: [ChangeBucket; 3] = [
        ChangeBucket::NewRoleSameCompany,
        ChangeBucket::SameRoleNewCompany,
        ChangeBucket::DifferentRoleAndCompany,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChangeBucket::NewRoleSameCompany => "New Role, Same Company",
            ChangeBucket::SameRoleNewCompany => "Same Role, New Company",
            ChangeBucket::DifferentRoleAndCompany => "Different Role & Company",
        }
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            ChangeBucket::NewRoleSameCompany => "new_role_same_company",
            ChangeBucket::SameRoleNewCompany => "same_role_new_company",
            ChangeBucket::DifferentRoleAndCompany => "different_role_and_company",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ChangeBucket::NewRoleSameCompany => &["Naam", "Company", "Old Role", "New Role"],
            ChangeBucket::SameRoleNewCompany => &["Naam", "Old Company", "New Company", "Role"],
            ChangeBucket::DifferentRoleAndCompany => &[
                "Naam",
                "Old Company",
                "New Company",
                "Old Role",
                "New Role",
            ],
        }
    }
}

impl fmt::Display for ChangeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 單一類別的輸出列，欄位依 [`ChangeBucket::columns`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    pub bucket: ChangeBucket,
    pub rows: Vec<Vec<String>>,
}

impl BucketTable {
    pub fn new(bucket: ChangeBucket) -> Self {
        Self {
            bucket,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.bucket.columns()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconStats {
    pub linkedin_records: usize,
    pub bullhorn_records: usize,
    pub skipped_blank_names: usize,
    pub linked_pairs: usize,
    pub unchanged_pairs: usize,
}

#[derive(Debug, Clone)]
pub struct ChangeReport {
    pub new_role_same_company: BucketTable,
    pub same_role_new_company: BucketTable,
    pub different_role_and_company: BucketTable,
    pub thresholds: Thresholds,
    pub stats: ReconStats,
}

impl ChangeReport {
    pub fn table(&self, bucket: ChangeBucket) -> &BucketTable {
        match bucket {
            ChangeBucket::NewRoleSameCompany => &self.new_role_same_company,
            ChangeBucket::SameRoleNewCompany => &self.same_role_new_company,
            ChangeBucket::DifferentRoleAndCompany => &self.different_role_and_company,
        }
    }

    /// Tables in report order.
    pub fn tables(&self) -> [&BucketTable; 3] {
        ChangeBucket::ALL.map(|bucket| self.table(bucket))
    }

    pub fn changed_rows(&self) -> usize {
        self.tables().iter().map(|t| t.len()).sum()
    }
}
