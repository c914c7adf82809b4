use anyhow::Result;
use contact_drift::domain::model::InputSlot;
use contact_drift::{
    DriftError, LocalStorage, ReconEngine, ReconcilePipeline, RunConfig, Thresholds,
};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const LINKEDIN_CSV: &str = "\
First Name,Last Name,URL,Email Address,Company,Position,Connected On
Jan,de Vries,https://www.linkedin.com/in/jdv,,Acme,Head of Data,01 Mar 2024
Peter,Bakker,https://www.linkedin.com/in/pb,,Globex,Recruiter,12 Jan 2023
Anna,Smit,https://www.linkedin.com/in/as,,Initech,CTO,05 May 2022
Lars,Jansen,https://www.linkedin.com/in/lj,,Umbrella,Developer,20 Jul 2021
";

const BULLHORN_CSV: &str = "\
Naam;Huidige functietitel;Bedrijf;Eigenaar
Jan de Vries;Data Engineer;Acme B.V.;Eva
Peter Bakker;Recruiter;Hooli;Eva
Anna Smit;Chief Financial Officer;Wayne Enterprises;Tom
Lars Jansen;Developer;Umbrella;Tom
Unknown Person;Nobody;Nowhere;Tom
;Ghost;Nowhere;Tom
";

fn write_inputs(dir: &Path) -> Result<(String, String)> {
    let bullhorn = dir.join("bullhorn.csv");
    let linkedin = dir.join("Connections.csv");
    std::fs::write(&bullhorn, BULLHORN_CSV)?;
    std::fs::write(&linkedin, LINKEDIN_CSV)?;
    Ok((
        bullhorn.to_str().unwrap().to_string(),
        linkedin.to_str().unwrap().to_string(),
    ))
}

fn run_config(first: String, second: String, output_path: &str, thresholds: Thresholds) -> RunConfig {
    RunConfig {
        first_input: first,
        second_input: second,
        thresholds,
        output_path: output_path.to_string(),
        report_name: "role_change_report".to_string(),
        delimiter: None,
    }
}

fn read_entry(archive: &mut zip::ZipArchive<std::fs::File>, name: &str) -> Result<String> {
    let mut content = String::new();
    archive.by_name(name)?.read_to_string(&mut content)?;
    Ok(content)
}

/// 完整流程：讀取兩個匯出檔、比對並輸出 ZIP 報告
#[test]
fn test_end_to_end_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("output");
    let output_path = output_path.to_str().unwrap();
    let (bullhorn, linkedin) = write_inputs(temp_dir.path())?;

    let config = run_config(bullhorn, linkedin, output_path, Thresholds::default());
    let storage = LocalStorage::new(output_path.to_string());
    let engine = ReconEngine::new(ReconcilePipeline::new(storage, config));

    let archive_path = engine.run()?;
    assert!(archive_path.ends_with("role_change_report.zip"));
    assert!(Path::new(&archive_path).exists());

    let mut archive = zip::ZipArchive::new(std::fs::File::open(&archive_path)?)?;
    assert_eq!(archive.len(), 4);

    assert_eq!(
        read_entry(&mut archive, "new_role_same_company.csv")?,
        "Naam,Company,Old Role,New Role\nJan de Vries,acme b.v.,data engineer,head of data\n"
    );
    assert_eq!(
        read_entry(&mut archive, "same_role_new_company.csv")?,
        "Naam,Old Company,New Company,Role\nPeter Bakker,hooli,globex,recruiter\n"
    );
    assert_eq!(
        read_entry(&mut archive, "different_role_and_company.csv")?,
        "Naam,Old Company,New Company,Old Role,New Role\n\
         Anna Smit,wayne enterprises,initech,chief financial officer,cto\n"
    );

    let summary: serde_json::Value = serde_json::from_str(&read_entry(&mut archive, "summary.json")?)?;
    assert_eq!(summary["stats"]["linked_pairs"], 4);
    assert_eq!(summary["stats"]["unchanged_pairs"], 1);
    assert_eq!(summary["stats"]["skipped_blank_names"], 1);
    assert!(summary["generated_at"].is_string());

    Ok(())
}

#[test]
fn test_input_order_is_irrelevant() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (bullhorn, linkedin) = write_inputs(temp_dir.path())?;

    let out_a = temp_dir.path().join("a");
    let out_b = temp_dir.path().join("b");
    let out_a = out_a.to_str().unwrap();
    let out_b = out_b.to_str().unwrap();

    let run = |first: &str, second: &str, out: &str| -> Result<String> {
        let config = run_config(first.to_string(), second.to_string(), out, Thresholds::default());
        let engine = ReconEngine::new(ReconcilePipeline::new(LocalStorage::new(out.to_string()), config));
        Ok(engine.run()?)
    };

    let mut a = zip::ZipArchive::new(std::fs::File::open(run(&bullhorn, &linkedin, out_a)?)?)?;
    let mut b = zip::ZipArchive::new(std::fs::File::open(run(&linkedin, &bullhorn, out_b)?)?)?;

    for name in [
        "new_role_same_company.csv",
        "same_role_new_company.csv",
        "different_role_and_company.csv",
    ] {
        assert_eq!(read_entry(&mut a, name)?, read_entry(&mut b, name)?);
    }

    Ok(())
}

#[test]
fn test_strict_title_threshold_moves_pairs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("output");
    let output_path = output_path.to_str().unwrap();
    let (bullhorn, linkedin) = write_inputs(temp_dir.path())?;

    // title 40 keeps "head of data" ≈ "data engineer" (50) as the same role
    let config = run_config(
        bullhorn,
        linkedin,
        output_path,
        Thresholds {
            company: 60,
            title: 40,
        },
    );
    let engine = ReconEngine::new(ReconcilePipeline::new(
        LocalStorage::new(output_path.to_string()),
        config,
    ));
    let mut archive = zip::ZipArchive::new(std::fs::File::open(engine.run()?)?)?;

    assert_eq!(
        read_entry(&mut archive, "new_role_same_company.csv")?,
        "Naam,Company,Old Role,New Role\n"
    );

    Ok(())
}

#[test]
fn test_unrecognized_input_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("output");
    let output_path = output_path.to_str().unwrap();
    let (bullhorn, _) = write_inputs(temp_dir.path())?;

    let contacts = temp_dir.path().join("contacts.csv");
    std::fs::write(&contacts, "Email,Phone\njan@acme.nl,0612345678\n")?;

    let config = run_config(
        bullhorn,
        contacts.to_str().unwrap().to_string(),
        output_path,
        Thresholds::default(),
    );
    let engine = ReconEngine::new(ReconcilePipeline::new(
        LocalStorage::new(output_path.to_string()),
        config,
    ));

    match engine.run() {
        Err(DriftError::UnrecognizedFormat { slot, found, .. }) => {
            assert_eq!(slot, InputSlot::Second);
            assert_eq!(found, "Email, Phone");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!Path::new(output_path).join("role_change_report.zip").exists());

    Ok(())
}

#[test]
fn test_two_bullhorn_exports_are_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("output");
    let output_path = output_path.to_str().unwrap();
    let (bullhorn, _) = write_inputs(temp_dir.path())?;

    let config = run_config(bullhorn.clone(), bullhorn, output_path, Thresholds::default());
    let engine = ReconEngine::new(ReconcilePipeline::new(
        LocalStorage::new(output_path.to_string()),
        config,
    ));

    let err = engine.run().unwrap_err();
    assert!(err.to_string().contains("both inputs are Bullhorn exports"));

    Ok(())
}

#[test]
fn test_missing_company_column() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("output");
    let output_path = output_path.to_str().unwrap();
    let (_, linkedin) = write_inputs(temp_dir.path())?;

    let partial = temp_dir.path().join("bullhorn_partial.csv");
    std::fs::write(&partial, "Naam,Huidige functietitel\nJan de Vries,Data Engineer\n")?;

    let config = run_config(
        linkedin,
        partial.to_str().unwrap().to_string(),
        output_path,
        Thresholds::default(),
    );
    let engine = ReconEngine::new(ReconcilePipeline::new(
        LocalStorage::new(output_path.to_string()),
        config,
    ));

    match engine.run() {
        Err(DriftError::MissingColumn { slot, column, .. }) => {
            assert_eq!(slot, InputSlot::Second);
            assert_eq!(column, "Bedrijf");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    Ok(())
}
