//! MERGE statement rendering for the upsert writers.
//!
//! Column identifiers are bracket-quoted so feed columns that collide with
//! T-SQL keywords (`TOP`, `SCALE`) stay valid.

use super::{Dedup, UpsertSpec};

/// Comma-joined bracketed column list for INSERT / DISTINCT clauses.
fn insert_cols(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("[{c}]"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-joined `src.`-prefixed bracketed column list.
fn src_cols(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("src.[{c}]"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the full MERGE batch for a spec, choosing the de-dup projection
/// from its [`Dedup`] strategy.
pub fn build_merge(spec: &UpsertSpec) -> String {
    let cols = insert_cols(spec.columns);
    let srcs = src_cols(spec.columns);

    let src_projection = match spec.dedup {
        Dedup::Distinct => format!(
            ";WITH src AS (\n\
             \tSELECT DISTINCT\n\
             \t\t{cols}\n\
             \tFROM {temp}\n\
             )",
            cols = cols,
            temp = spec.temp_table,
        ),
        Dedup::RowNumber(partition) => format!(
            ";WITH src AS (\n\
             \tSELECT\n\
             \t\t{srcs}\n\
             \tFROM (\n\
             \t\tSELECT DISTINCT\n\
             \t\t\tROW_NUMBER() OVER (PARTITION BY {partition} ORDER BY {partition}) AS RowNum,\n\
             \t\t\t{srcs}\n\
             \t\tFROM {temp} AS src\n\
             \t) AS src\n\
             \tWHERE src.RowNum = 1\n\
             )",
            srcs = srcs,
            partition = partition,
            temp = spec.temp_table,
        ),
    };

    format!(
        "SET NOCOUNT ON;\n\n\
         {src_projection}\n\
         MERGE {target} WITH (HOLDLOCK) AS tgt\n\
         USING src\n\
         \tON {join}\n\
         WHEN MATCHED THEN\n\
         \tUPDATE SET {update_set}\n\
         WHEN NOT MATCHED BY TARGET THEN\n\
         \tINSERT ({cols})\n\
         \tVALUES ({srcs});",
        src_projection = src_projection,
        target = spec.target,
        join = spec.join_on,
        update_set = spec.update_set,
        cols = cols,
        srcs = srcs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISTINCT_SPEC: UpsertSpec = UpsertSpec {
        target: "dbo.fgrupout",
        temp_table: "#tmp_fgrupout",
        columns: &["GROUPOUT", "GROUPNAME"],
        temp_ddl: "CREATE TABLE #tmp_fgrupout (GROUPOUT NVARCHAR(255), GROUPNAME NVARCHAR(255))",
        join_on: "tgt.GROUPOUT = src.GROUPOUT",
        update_set: "tgt.GROUPNAME = src.GROUPNAME",
        dedup: Dedup::Distinct,
    };

    const ROW_NUMBER_SPEC: UpsertSpec = UpsertSpec {
        target: "dbo.fcustmst",
        temp_table: "#tmp_fcustmst",
        columns: &["CUSTNO", "KODECABANG", "CUSTNAME"],
        temp_ddl: "",
        join_on: "tgt.CUSTNO = src.CUSTNO AND tgt.KODECABANG = src.KODECABANG",
        update_set: "tgt.CUSTNAME = src.CUSTNAME",
        dedup: Dedup::RowNumber("src.CUSTNO, src.KODECABANG"),
    };

    #[test]
    fn distinct_merge_shape() {
        let sql = build_merge(&DISTINCT_SPEC);
        assert!(sql.starts_with("SET NOCOUNT ON;"));
        assert!(sql.contains("SELECT DISTINCT"));
        assert!(!sql.contains("ROW_NUMBER"));
        assert!(sql.contains("MERGE dbo.fgrupout WITH (HOLDLOCK) AS tgt"));
        assert!(sql.contains("ON tgt.GROUPOUT = src.GROUPOUT"));
        assert!(sql.contains("INSERT ([GROUPOUT], [GROUPNAME])"));
        assert!(sql.contains("VALUES (src.[GROUPOUT], src.[GROUPNAME]);"));
    }

    #[test]
    fn row_number_merge_dedups_on_partition_columns() {
        let sql = build_merge(&ROW_NUMBER_SPEC);
        assert!(sql.contains(
            "ROW_NUMBER() OVER (PARTITION BY src.CUSTNO, src.KODECABANG \
             ORDER BY src.CUSTNO, src.KODECABANG) AS RowNum"
        ));
        assert!(sql.contains("WHERE src.RowNum = 1"));
        assert!(sql.contains("MERGE dbo.fcustmst WITH (HOLDLOCK) AS tgt"));
        assert!(sql.contains("VALUES (src.[CUSTNO], src.[KODECABANG], src.[CUSTNAME]);"));
    }

    #[test]
    fn update_clause_is_emitted_verbatim() {
        let sql = build_merge(&ROW_NUMBER_SPEC);
        assert!(sql.contains("UPDATE SET tgt.CUSTNAME = src.CUSTNAME"));
    }
}
