//! The process-wide dialect. Kept in its own test binary so installation
//! order is under this file's control.

mod common;

use common::person;
use oxide_sqlbuilder::dialect::{current_dialect, set_dialect};
use oxide_sqlbuilder::prelude::*;
use oxide_sqlbuilder::BuildError;

#[test]
fn test_install_once_then_build() {
    let person = person();
    let select = Select::new()
        .from(&person)
        .where_clause(person.c("id").unwrap().eq(1));

    assert_eq!(select.build().unwrap_err(), BuildError::NoDialect);
    assert_eq!(select.build().unwrap_err().to_string(), "no dialect selected");

    set_dialect(GenericDialect::numbered()).unwrap();
    assert_eq!(current_dialect().unwrap().name(), "generic");

    let err = set_dialect(GenericDialect::new()).unwrap_err();
    assert_eq!(err, BuildError::DialectAlreadySet);

    // The first installed dialect stays active.
    let (sql, params) = select.build().unwrap();
    assert_eq!(sql, r#"SELECT * FROM "PERSON" WHERE "PERSON"."id"=$1"#);
    assert_eq!(params, vec![SqlValue::Int(1)]);
    assert_eq!(
        select.build().unwrap(),
        select.build_with(&GenericDialect::numbered()).unwrap()
    );
}
