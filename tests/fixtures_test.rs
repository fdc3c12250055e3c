//! Expected results of every built-in lint on every fixture certificate.

use std::path::Path;

use certlint::certificate::Certificate;
use certlint::lint::{registry, Evaluator, Status};

const ENCODING: &str = "e_ev_orgid_encoding";
const WELL_FORMED: &str = "e_ev_orgid_well_formed";
const EXT_PRESENT: &str = "e_ev_orgidext_present_mandatory";
const NTR_SUBJECT: &str = "e_ev_ntr_subject_jurisdiction_serial";
const EV_TOO_LONG: &str = "e_ev_valid_time_too_long";
const BR_398: &str = "e_sub_cert_valid_time_longer_than_398_days";
const NOT_POSITIVE: &str = "e_validity_time_not_positive";
const SKI_MISSING: &str = "w_ext_subject_key_identifier_missing_sub_cert";

use Status::{Error, Pass, Warn, NA, NE};

fn load(name: &str) -> Certificate {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    Certificate::from_pem(&std::fs::read(path).unwrap()).unwrap()
}

fn check(fixture: &str, expected: [Status; 8]) {
    let names = [
        ENCODING,
        WELL_FORMED,
        EXT_PRESENT,
        NTR_SUBJECT,
        EV_TOO_LONG,
        BR_398,
        NOT_POSITIVE,
        SKI_MISSING,
    ];
    let report = Evaluator::new(registry::global().unwrap())
        .evaluate_all(&load(fixture))
        .unwrap();

    for (name, status) in names.iter().zip(expected) {
        let result = report.get(name).unwrap();
        assert_eq!(
            result.status, status,
            "{} on {}: {:?}",
            name, fixture, result.details
        );
    }
}

#[test]
fn ev_valid() {
    check("ev_valid.pem", [Pass, Pass, Pass, Pass, Pass, Pass, Pass, Pass]);
}

#[test]
fn ev_without_org_id_is_not_applicable() {
    check("ev_no_orgid.pem", [NA, NA, NA, NA, Pass, Pass, Pass, Pass]);
}

#[test]
fn ev_org_id_ia5_string() {
    check("ev_orgid_ia5.pem", [Error, Pass, Pass, Pass, Pass, Pass, Pass, Pass]);
}

#[test]
fn ev_org_id_extension_missing() {
    check(
        "ev_orgidext_missing.pem",
        [Pass, Pass, Error, Pass, Pass, Pass, Pass, Pass],
    );
}

#[test]
fn ev_org_id_extension_missing_before_mandatory() {
    check(
        "ev_orgidext_missing_2019.pem",
        [Pass, Pass, NE, Pass, Pass, NE, Pass, Pass],
    );
}

#[test]
fn ev_ntr_jurisdiction_mismatch() {
    check(
        "ev_ntr_jurisdiction_mismatch.pem",
        [Pass, Pass, Pass, Error, Pass, Pass, Pass, Pass],
    );
}

#[test]
fn ev_ntr_state_missing() {
    check(
        "ev_ntr_state_missing.pem",
        [Pass, Pass, Pass, Error, Pass, Pass, Pass, Pass],
    );
}

#[test]
fn ev_vat_org_id() {
    check("ev_vat_valid.pem", [Pass, Pass, Pass, NA, Pass, Pass, Pass, Pass]);
}

#[test]
fn ev_org_id_bad_pattern() {
    check(
        "ev_orgid_bad_pattern.pem",
        [Pass, Error, Pass, NA, Pass, Pass, Pass, Pass],
    );
}

#[test]
fn ev_issued_before_org_id_rules() {
    check("ev_too_long.pem", [NE, NE, NE, NE, Error, NE, Pass, Pass]);
}

#[test]
fn dv_long_validity() {
    check(
        "dv_long_validity.pem",
        [NA, NA, NA, NA, NA, Error, Pass, Warn],
    );
}

#[test]
fn json_report_shape() {
    let report = Evaluator::new(registry::global().unwrap())
        .evaluate(
            &load("ev_orgid_ia5.pem"),
            &certlint::lint::Selection::all().include_names([ENCODING, EXT_PRESENT]),
        )
        .unwrap();

    insta::assert_json_snapshot!(report, @r###"
    {
      "e_ev_orgid_encoding": {
        "result": "error",
        "details": "invalid string type in subject:organizationIdentifier: IA5String"
      },
      "e_ev_orgidext_present_mandatory": {
        "result": "pass"
      }
    }
    "###);
}
