//! End-to-end tests for the graph engine over the SQLite store
//!
//! These exercise the documented behavioral properties: mirror symmetry,
//! duplicate rejection, cardinality rules, tolerant deletion, and the
//! Alice/Bob worked example.

use kinship_domain::traits::{ProfileStore, RelationStore};
use kinship_domain::{Gender, Person, PersonId, Profile, RelationType};
use kinship_graph::{FamilyGraph, GraphError, RejectionReason, StaticMediaResolver};
use kinship_store::SqliteStore;

fn graph() -> FamilyGraph<SqliteStore> {
    FamilyGraph::new(SqliteStore::new(":memory:").unwrap())
}

fn add_person(
    graph: &mut FamilyGraph<SqliteStore>,
    first: &str,
    gender: Gender,
) -> PersonId {
    let person = Person::new(1000);
    graph.store_mut().add_person(&person).unwrap();
    graph
        .store_mut()
        .upsert_profile(
            person.id,
            &Profile {
                first_name: first.to_string(),
                middle_name: None,
                last_name: "Liddell".to_string(),
                gender,
            },
        )
        .unwrap();
    person.id
}

fn rejection(err: GraphError) -> RejectionReason {
    match err {
        GraphError::Rejected(reason) => reason,
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn symmetry_forward_and_mirror_exist_after_add() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    for (relation, expected_mirror) in [
        (RelationType::Parent, RelationType::Child),
        (RelationType::StepParent, RelationType::StepChild),
        (RelationType::Sibling, RelationType::Sibling),
        (RelationType::Spouse, RelationType::Spouse),
    ] {
        graph.add_relationship(alice, bob, relation).unwrap();

        let forward = graph.store().find_edge(alice, bob).unwrap().unwrap();
        let mirror = graph.store().find_edge(bob, alice).unwrap().unwrap();
        assert_eq!(forward.relation, relation);
        assert_eq!(mirror.relation, expected_mirror);

        graph.remove_relationship(alice, bob).unwrap();
    }
}

#[test]
fn duplicate_ordered_pair_rejected_for_any_type() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    graph
        .add_relationship(alice, bob, RelationType::Sibling)
        .unwrap();

    let err = graph
        .add_relationship(alice, bob, RelationType::Spouse)
        .unwrap_err();
    assert_eq!(rejection(err), RejectionReason::DuplicateRelationship);
}

#[test]
fn self_loops_always_rejected() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);

    for relation in RelationType::KNOWN {
        let err = graph.add_relationship(alice, alice, relation).unwrap_err();
        assert_eq!(rejection(err), RejectionReason::SelfRelation);
    }
}

#[test]
fn parent_cardinality_walkthrough() {
    let mut graph = graph();
    let child = add_person(&mut graph, "Carol", Gender::Female);
    let father = add_person(&mut graph, "Frank", Gender::Male);
    let second_father = add_person(&mut graph, "Fred", Gender::Male);
    let mother = add_person(&mut graph, "Mary", Gender::Female);
    let third = add_person(&mut graph, "Terry", Gender::Other);

    // First MALE parent succeeds.
    graph
        .add_relationship(child, father, RelationType::Parent)
        .unwrap();

    // Second MALE parent collides.
    let err = graph
        .add_relationship(child, second_father, RelationType::Parent)
        .unwrap_err();
    assert_eq!(rejection(err), RejectionReason::DuplicateGenderParent);

    // FEMALE second parent succeeds.
    graph
        .add_relationship(child, mother, RelationType::Parent)
        .unwrap();

    // Any third parent is too many.
    let err = graph
        .add_relationship(child, third, RelationType::Parent)
        .unwrap_err();
    assert_eq!(rejection(err), RejectionReason::TooManyParents);
}

#[test]
fn second_parent_with_other_gender_never_collides() {
    let mut graph = graph();
    let child = add_person(&mut graph, "Carol", Gender::Female);
    let first = add_person(&mut graph, "Pat", Gender::Other);
    let second = add_person(&mut graph, "Sam", Gender::Other);

    graph
        .add_relationship(child, first, RelationType::Parent)
        .unwrap();
    // Two OTHER-gender parents are accepted; only exact MALE/MALE or
    // FEMALE/FEMALE pairs collide.
    graph
        .add_relationship(child, second, RelationType::Parent)
        .unwrap();
}

#[test]
fn spouse_singularity_and_exspouse_exemption() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);
    let carol = add_person(&mut graph, "Carol", Gender::Female);
    let dave = add_person(&mut graph, "Dave", Gender::Male);

    graph
        .add_relationship(alice, bob, RelationType::Spouse)
        .unwrap();

    let err = graph
        .add_relationship(alice, carol, RelationType::Spouse)
        .unwrap_err();
    assert_eq!(rejection(err), RejectionReason::MultipleSpouses);

    // EXSPOUSE edges are unlimited regardless of the existing spouse.
    graph
        .add_relationship(alice, carol, RelationType::ExSpouse)
        .unwrap();
    graph
        .add_relationship(alice, dave, RelationType::ExSpouse)
        .unwrap();
}

#[test]
fn tolerant_delete_heals_missing_mirror() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    // Fabricate inconsistent state: forward row without its mirror.
    graph
        .store_mut()
        .insert_edge(alice, bob, RelationType::Spouse)
        .unwrap();

    // Removal still succeeds and the forward edge is gone.
    graph.remove_relationship(alice, bob).unwrap();
    assert!(graph.store().find_edge(alice, bob).unwrap().is_none());
}

#[test]
fn remove_of_nonexistent_relationship_fails_and_mutates_nothing() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);
    let carol = add_person(&mut graph, "Carol", Gender::Female);

    graph
        .add_relationship(alice, carol, RelationType::Sibling)
        .unwrap();

    let err = graph.remove_relationship(alice, bob).unwrap_err();
    assert!(matches!(err, GraphError::RelationshipNotFound));

    // Unrelated edges are untouched.
    assert!(graph.store().find_edge(alice, carol).unwrap().is_some());
    assert!(graph.store().find_edge(carol, alice).unwrap().is_some());
}

#[test]
fn removed_relationship_can_be_readded() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    graph
        .add_relationship(alice, bob, RelationType::Spouse)
        .unwrap();
    graph.remove_relationship(alice, bob).unwrap();

    // Changing a relationship is delete-then-add.
    graph
        .add_relationship(alice, bob, RelationType::ExSpouse)
        .unwrap();
    let forward = graph.store().find_edge(alice, bob).unwrap().unwrap();
    assert_eq!(forward.relation, RelationType::ExSpouse);
}

#[test]
fn alice_bob_worked_example() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    graph
        .add_relationship(alice, bob, RelationType::Parent)
        .unwrap();

    let forward = graph.store().find_edge(alice, bob).unwrap().unwrap();
    let mirror = graph.store().find_edge(bob, alice).unwrap().unwrap();
    assert_eq!(forward.relation, RelationType::Parent);
    assert_eq!(mirror.relation, RelationType::Child);
}

#[test]
fn contradictory_reverse_pair_is_caught_by_mirror_row() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    graph
        .add_relationship(alice, bob, RelationType::Parent)
        .unwrap();

    // The duplicate check keys only on the ordered pair (subject, target).
    // Adding PARENT in the reverse direction targets (bob, alice), which is
    // already occupied by the CHILD mirror row, so it comes back as a plain
    // duplicate rather than a contradiction-specific rejection.
    let err = graph
        .add_relationship(bob, alice, RelationType::Parent)
        .unwrap_err();
    assert_eq!(rejection(err), RejectionReason::DuplicateRelationship);
}

#[test]
fn list_relatives_enriches_and_skips_profileless_targets() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);
    let carol = add_person(&mut graph, "Carol", Gender::Female);

    graph
        .add_relationship(alice, bob, RelationType::Parent)
        .unwrap();
    graph
        .add_relationship(alice, carol, RelationType::Sibling)
        .unwrap();
    graph.store_mut().set_picture(bob, "bob.jpg").unwrap();

    // A person without any profile, linked via a fabricated legacy edge.
    let ghost = Person::new(1000);
    graph.store_mut().add_person(&ghost).unwrap();
    graph
        .store_mut()
        .insert_edge(alice, ghost.id, RelationType::StepSibling)
        .unwrap();

    let media = StaticMediaResolver::default();
    let relatives = graph.list_relatives(alice, &media).unwrap();

    // Insertion order, ghost silently skipped.
    assert_eq!(relatives.len(), 2);
    assert_eq!(relatives[0].first_name, "Bob");
    assert_eq!(relatives[0].relation, "PARENT");
    assert_eq!(relatives[0].avatar_url, "/static/profile_pictures/bob.jpg");
    assert_eq!(relatives[1].first_name, "Carol");
    assert_eq!(
        relatives[1].avatar_url,
        "/static/profile_pictures/default.jpg"
    );
    assert_eq!(relatives[0].relative_id, bob.to_string());
}

#[test]
fn validate_facade_reports_without_mutation() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    let result = graph.validate(alice, bob, RelationType::Spouse).unwrap();
    assert!(result.is_accepted());
    assert!(graph.store().find_edge(alice, bob).unwrap().is_none());
}

#[test]
fn person_deletion_cascade_cleans_up_edges() {
    let mut graph = graph();
    let alice = add_person(&mut graph, "Alice", Gender::Female);
    let bob = add_person(&mut graph, "Bob", Gender::Male);

    graph
        .add_relationship(alice, bob, RelationType::Spouse)
        .unwrap();
    graph.store_mut().remove_person(bob).unwrap();

    let media = StaticMediaResolver::default();
    assert!(graph.list_relatives(alice, &media).unwrap().is_empty());
    assert!(graph.store().find_edge(alice, bob).unwrap().is_none());
}
