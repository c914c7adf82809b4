use crate::domain::model::RawTable;
use crate::utils::error::Result;

const CANDIDATE_DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

/// Picks the most frequent of `,` `;` and tab in the header line; `,` on a tie.
pub fn sniff_delimiter(data: &[u8]) -> u8 {
    let header_line = data.split(|&b| b == b'\n').next().unwrap_or(&[]);

    let mut best = (b',', 0usize);
    for delimiter in CANDIDATE_DELIMITERS {
        let count = header_line.iter().filter(|&&b| b == delimiter).count();
        if count > best.1 {
            best = (delimiter, count);
        }
    }
    best.0
}

/// Parses delimited text with a header row into a [`RawTable`].
///
/// Rows may be shorter or longer than the header. Invalid UTF-8 is replaced
/// rather than rejected, exports from older CRMs are often Windows-1252.
pub fn parse_table(data: &[u8], delimiter: Option<u8>) -> Result<RawTable> {
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(data));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect();

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        if record.iter().all(|field| field.iter().all(u8::is_ascii_whitespace)) {
            continue;
        }
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    tracing::debug!(
        "Parsed {} rows with {} columns (delimiter {:?})",
        rows.len(),
        headers.len(),
        delimiter as char
    );

    Ok(RawTable::new(headers, rows))
}
