use crm_client_ui::domain::client::Client;
use crm_client_ui::dto::api::ClientsResponse;
use crm_client_ui::dto::client::{ClientModalData, ClientModalMode, ClientsPageData};
use crm_client_ui::models::config::UiConfig;
use crm_client_ui::ui::modal::ModalState;
use serde_json::json;

fn listing() -> serde_json::Value {
    json!({
        "total": 2,
        "clients": [
            {
                "id": 1,
                "name": "Alice",
                "email": "alice@example.com",
                "phone": "111",
                "address": "Addr1",
                "created_at": "2024-05-01T09:00:00",
                "updated_at": "2024-05-01T09:00:00",
                "responsible_person": ["Oleg"]
            },
            {
                "id": 2,
                "name": "Bob",
                "email": "bob@example.com",
                "phone": "222",
                "address": "Addr2",
                "created_at": "2024-05-02T09:00:00",
                "updated_at": "2024-05-03T12:00:00"
            }
        ]
    })
}

#[test]
fn listing_builds_first_page() {
    let response: ClientsResponse = serde_json::from_value(listing()).unwrap();
    let config = UiConfig::default();
    let page = ClientsPageData::from_response(response, 1, &config);

    assert_eq!(page.total, 2);
    assert_eq!(page.clients.pages, vec![Some(1)]);
    let names: Vec<_> = page.clients.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn listing_with_broken_record_is_rejected() {
    let mut body = listing();
    body["clients"][1]["updated_at"] = json!("2024-04-01T00:00:00");
    assert!(serde_json::from_value::<ClientsResponse>(body).is_err());
}

#[test]
fn every_client_keeps_its_timeline() {
    let response: ClientsResponse = serde_json::from_value(listing()).unwrap();
    assert!(response.clients.iter().all(|c| c.updated_at() >= c.created_at()));
}

#[test]
fn edit_flow_opens_prefilled_modal_and_submits_payload() {
    let response: ClientsResponse = serde_json::from_value(listing()).unwrap();
    let bob: &Client = &response.clients[1];

    let mut modal = ModalState::new();
    modal.open_modal(ClientModalData::edit(bob));

    if let Some(data) = modal.data_mut() {
        data.payload.phone = "333".to_string();
    }

    let data = modal.data().unwrap();
    assert_eq!(data.mode, ClientModalMode::Edit(bob.id()));
    assert_eq!(
        serde_json::to_value(&data.payload).unwrap(),
        json!({
            "name": "Bob",
            "email": "bob@example.com",
            "phone": "333",
            "address": "Addr2"
        })
    );

    modal.close_modal();
    assert!(modal.data().is_none());
}
