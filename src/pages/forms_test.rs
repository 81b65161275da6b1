use super::*;

fn form(id: i64, description: Option<&str>) -> Form {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Formulaire {id}"),
        "description": description,
        "created_at": "2024-01-05T09:05:00",
        "response_count": 3
    }))
    .unwrap()
}

#[test]
fn cards_link_to_view_and_hide_edit_without_permission() {
    let cards = form_cards(&[form(7, Some("Inscription"))], false);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].view_href, "/forms/7");
    assert_eq!(cards[0].edit_href, None);
    assert_eq!(cards[0].description, "Inscription");
}

#[test]
fn cards_offer_edit_with_permission() {
    let cards = form_cards(&[form(7, None), form(8, None)], true);
    let edits: Vec<_> = cards.iter().map(|c| c.edit_href.as_deref()).collect();
    assert_eq!(edits, vec![Some("/forms/7/edit"), Some("/forms/8/edit")]);
}

#[test]
fn blank_description_gets_placeholder() {
    let cards = form_cards(&[form(1, None), form(2, Some("  "))], false);
    assert!(cards.iter().all(|c| c.description == "Aucune description"));
}

#[test]
fn creation_date_is_formatted() {
    let cards = form_cards(&[form(1, None)], false);
    assert_eq!(cards[0].created, "5 janvier 2024 à 09:05");
    assert_eq!(cards[0].response_count, 3);
}
