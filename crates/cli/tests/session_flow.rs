use std::io::Cursor;

use backpack_cli::{Session, SessionEnd};
use backpack_inventory::Backpack;

struct Transcript {
    end: SessionEnd,
    backpack: Backpack,
    output: String,
}

fn play(input: &str) -> Transcript {
    play_bytes(input.as_bytes())
}

fn play_bytes(input: &[u8]) -> Transcript {
    let mut session = Session::new(Cursor::new(input.to_vec()), Vec::new());
    let end = session.run().expect("in-memory session cannot fail");
    let (backpack, out) = session.into_parts();
    Transcript {
        end,
        backpack,
        output: String::from_utf8(out).expect("output is utf-8"),
    }
}

fn names(backpack: &Backpack) -> Vec<&str> {
    backpack.iter().map(|i| i.name().as_str()).collect()
}

fn add(name: &str, category: &str, quantity: &str) -> String {
    format!("1\n{name}\n{category}\n{quantity}\n")
}

#[test]
fn add_then_search_shows_the_stored_record() {
    let input = format!("{}4\nmedkit\n0\n", add("Medkit", "healing", "5"));
    let t = play(&input);

    assert_eq!(t.end, SessionEnd::Exit);
    assert!(t.output.contains("Item 'Medkit' added to the backpack successfully."));
    assert!(t.output.contains("  Name: Medkit\n  Category: healing\n  Quantity: 5\n"));
    assert!(t.output.contains("Total items: 1/10"));
}

#[test]
fn invalid_quantities_are_asked_again() {
    let t = play("1\nRope\ntool\nabc\n0\n-4\n3\n0\n");

    assert_eq!(
        t.output
            .matches("Invalid quantity. Enter a positive number: ")
            .count(),
        3
    );
    let rope = t.backpack.lookup("rope").unwrap();
    assert_eq!(rope.quantity().get(), 3);
    assert_eq!(rope.category().as_str(), "tool");
}

#[test]
fn blank_name_is_asked_again() {
    let t = play("1\n\n   \nFlare Gun\nweapon\n1\n0\n");
    assert_eq!(t.output.matches("Name cannot be empty. Item name: ").count(), 2);
    assert_eq!(names(&t.backpack), vec!["Flare Gun"]);
}

#[test]
fn duplicate_is_rejected_before_category_is_asked() {
    let input = format!("{}1\nSWORD\n0\n", add("Sword", "weapon", "1"));
    let t = play(&input);

    assert!(t
        .output
        .contains("Item 'SWORD' already exists in the backpack. Action cancelled."));
    assert_eq!(t.output.matches("Item category").count(), 1);
    assert_eq!(t.backpack.len(), 1);
    assert_eq!(t.end, SessionEnd::Exit);
}

#[test]
fn long_name_and_category_are_truncated() {
    let name = "A".repeat(40);
    let category = "c".repeat(25);
    let t = play(&format!("{}0\n", add(&name, &category, "2")));

    let item = t.backpack.get(0).unwrap();
    assert_eq!(item.name().as_str(), "A".repeat(29));
    assert_eq!(item.category().as_str(), "c".repeat(19));
}

#[test]
fn category_keeps_only_the_first_word() {
    let t = play(&format!("{}0\n", add("Water", "drink clean", "2 bottles")));
    let item = t.backpack.lookup("water").unwrap();
    assert_eq!(item.category().as_str(), "drink");
    assert_eq!(item.quantity().get(), 2);
}

#[test]
fn full_backpack_is_reported_without_prompting() {
    let mut input: String = (0..10).map(|i| add(&format!("Loot{i}"), "misc", "1")).collect();
    input.push_str("1\n0\n");
    let t = play(&input);

    assert_eq!(t.backpack.len(), 10);
    assert!(t
        .output
        .contains("Backpack full! Maximum capacity (10 items) reached."));
    assert_eq!(t.output.matches("--- NEW ITEM REGISTRATION ---").count(), 10);
    assert_eq!(t.end, SessionEnd::Exit);
}

#[test]
fn remove_compacts_and_relists() {
    let input = format!(
        "{}{}{}2\nb\n3\n0\n",
        add("A", "misc", "1"),
        add("B", "misc", "1"),
        add("C", "misc", "1"),
    );
    let t = play(&input);

    assert_eq!(names(&t.backpack), vec!["A", "C"]);
    assert!(t.output.contains("Item 'B' removed from the backpack successfully."));
    assert!(t.output.contains("Total items: 2/10"));
}

#[test]
fn remove_and_search_on_empty_backpack_do_not_prompt() {
    let t = play("2\n4\n0\n");

    assert!(t.output.contains("Backpack is empty. Nothing to remove."));
    assert!(t.output.contains("Backpack is empty. Nothing to search for."));
    assert!(!t.output.contains("Enter the NAME"));
    assert!(t.output.contains("Backpack is empty. Collect some items!"));
}

#[test]
fn missing_names_are_reported_without_mutation() {
    let input = format!("{}2\nShield\n4\nShield\n0\n", add("Sword", "weapon", "1"));
    let t = play(&input);

    assert_eq!(
        t.output
            .matches("Item 'Shield' not found in the backpack.")
            .count(),
        2
    );
    assert_eq!(names(&t.backpack), vec!["Sword"]);
}

#[test]
fn bad_menu_input_reprompts() {
    let t = play("hello\n9\n\n3\n0\n");

    assert!(t.output.contains("Invalid option. Enter a number."));
    assert!(t.output.contains("Invalid option. Try again."));
    assert_eq!(t.output.matches("Choose an option: ").count(), 4);
    assert_eq!(t.end, SessionEnd::Exit);
}

#[test]
fn farewell_is_printed_on_exit_only() {
    let exit = play("0\n");
    assert!(exit
        .output
        .contains("Closing system. Inventory saved! Good luck in the game!"));

    let eof = play("3\n");
    assert_eq!(eof.end, SessionEnd::EndOfInput);
    assert!(!eof.output.contains("Inventory saved!"));
}

#[test]
fn sword_scenario_through_the_menu() {
    let mut input = add("Sword", "weapon", "1");
    // Rejected right after the name: no category or quantity is read.
    input.push_str("1\nsword\n");
    for i in 0..9 {
        input.push_str(&add(&format!("Item{i}"), "misc", "1"));
    }
    input.push_str("1\n");
    input.push_str("2\nSword\n0\n");

    let t = play(&input);

    assert_eq!(t.backpack.len(), 9);
    assert!(t.backpack.find("sword").is_none());
    assert!(t.output.contains("already exists"));
    assert!(t.output.contains("Backpack full!"));
    assert!(t.output.contains("Total items: 10/10"));
    assert!(t.output.contains("Total items: 9/10"));
    assert_eq!(t.end, SessionEnd::Exit);

    let last_listing = t
        .output
        .rsplit("--- INVENTORY (BACKPACK) ---")
        .next()
        .unwrap();
    assert!(last_listing.contains("Total items: 9/10"));
    assert!(!last_listing.contains("| Sword "));
}

#[test]
fn non_utf8_input_does_not_end_the_session() {
    let t = play_bytes(b"1\nPo\xe7\xe3o\nhealing\n5\n3\n0\n");

    assert_eq!(t.end, SessionEnd::Exit);
    assert_eq!(t.backpack.len(), 1);
    let item = t.backpack.get(0).unwrap();
    assert_eq!(item.name().as_str(), "Po\u{FFFD}\u{FFFD}o");
    assert_eq!(item.quantity().get(), 5);
    assert!(t
        .output
        .contains("Closing system. Inventory saved! Good luck in the game!"));
}

#[test]
fn non_utf8_menu_selection_is_rejected_and_reprompted() {
    let t = play_bytes(b"\xff\n3\n0\n");

    assert_eq!(t.end, SessionEnd::Exit);
    assert!(t.output.contains("Invalid option. Enter a number."));
    assert!(t.output.contains("Backpack is empty. Collect some items!"));
}
