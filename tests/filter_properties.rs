use casefile::filter::{apply_filters, FilterCriteria};
use casefile::index::build_indexes;
use casefile::record::{Classification, Record, RecordId};
use casefile::session::toggle;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn classification() -> impl Strategy<Value = Classification> {
    prop_oneof![
        Just(Classification::Declassified),
        Just(Classification::PartiallyRedacted),
        Just(Classification::Unsealed),
    ]
}

// Small alphabets so generated filters actually hit records.
fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            "[AaBb]{1,2}",
            "(Witness|Associate|witness)",
            "[a-c ]{1,6}",
            "[a-c ]{1,8}",
            classification(),
            prop::collection::vec("[AaBb]{1,2}", 0..3),
        ),
        0..16,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (person, role, document_type, summary, classification, connections))| Record {
                id: RecordId::new(i as u64 + 1),
                person,
                role,
                document_type,
                date: "2015-01-02".to_string(),
                summary,
                classification,
                connections,
            })
            .collect()
    })
}

fn ids(records: &[&Record]) -> Vec<RecordId> {
    records.iter().map(|r| r.id).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn unconstrained_filter_is_identity(records in arb_records()) {
        let result = apply_filters(&records, &FilterCriteria::new());
        let all: Vec<RecordId> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(ids(&result), all);
    }

    #[test]
    fn person_filter_is_sound_and_complete(records in arb_records(), person in "[AaBb]{1,2}") {
        let result = apply_filters(&records, &FilterCriteria::new().with_person(person.clone()));
        let mut reference = Vec::new();
        for r in &records {
            if r.person == person {
                reference.push(r.id);
            }
        }
        prop_assert_eq!(ids(&result), reference);
    }

    #[test]
    fn person_and_role_is_intersection(
        records in arb_records(),
        person in "[AaBb]{1,2}",
        role in "(Witness|Associate)",
    ) {
        let by_person = ids(&apply_filters(&records, &FilterCriteria::new().with_person(person.clone())));
        let by_role = ids(&apply_filters(&records, &FilterCriteria::new().with_role(role.clone())));
        let both = ids(&apply_filters(
            &records,
            &FilterCriteria::new().with_person(person).with_role(role),
        ));
        let intersection: Vec<RecordId> =
            by_person.into_iter().filter(|id| by_role.contains(id)).collect();
        prop_assert_eq!(both, intersection);
    }

    #[test]
    fn search_ignores_case(records in arb_records(), query in "[a-cA-C ]{1,3}") {
        let lower = ids(&apply_filters(&records, &FilterCriteria::new().with_search(query.to_lowercase())));
        let upper = ids(&apply_filters(&records, &FilterCriteria::new().with_search(query.to_uppercase())));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn indexes_are_sorted_and_unique(records in arb_records()) {
        let indexes = build_indexes(&records);
        prop_assert!(indexes.persons.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indexes.roles.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(records.iter().all(|r| indexes.is_person(&r.person) && indexes.is_role(&r.role)));
        prop_assert_eq!(indexes.classifications, Classification::ALL.to_vec());
    }

    #[test]
    fn toggle_twice_collapses(id in 1u64..1000) {
        let id = RecordId::new(id);
        prop_assert_eq!(toggle(toggle(None, id), id), None);
    }
}
