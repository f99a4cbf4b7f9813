use bravo_core::{
    Dashboard, Design, PropagandaDistrict, PropagandaItem, PropagandaProvince,
    PropagandaService, PropagandaServiceError,
};

fn setup_path(state: &mut Dashboard) -> (bravo_core::RecordId, bravo_core::RecordId) {
    let province = PropagandaProvince::new("Santa");
    let province_id = province.id;
    PropagandaService::new(state).save_province(province).unwrap();

    let district = PropagandaDistrict::new("Chimbote");
    let district_id = district.id;
    PropagandaService::new(state)
        .save_district(province_id, district)
        .unwrap();
    (province_id, district_id)
}

#[test]
fn item_crud_along_the_path() {
    let mut state = Dashboard::new();
    let (province_id, district_id) = setup_path(&mut state);

    let mut item = PropagandaItem::new("Panel en Av. Pardo", "+51 943 333 444");
    let item_id = item.id;
    PropagandaService::new(&mut state)
        .save_item(province_id, district_id, item.clone())
        .unwrap();

    item.external_link = "https://maps.example.com/panel".to_string();
    PropagandaService::new(&mut state)
        .save_item(province_id, district_id, item)
        .unwrap();

    let items = &state.propaganda_provinces[0].districts[0].items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].external_link, "https://maps.example.com/panel");
    assert_eq!(items[0].whatsapp_link().as_deref(), Some("https://wa.me/51943333444"));

    PropagandaService::new(&mut state)
        .delete_item(province_id, district_id, item_id)
        .unwrap();
    assert!(state.propaganda_provinces[0].districts[0].items.is_empty());

    let err = PropagandaService::new(&mut state)
        .delete_item(province_id, district_id, item_id)
        .unwrap_err();
    assert!(matches!(err, PropagandaServiceError::ItemNotFound(id) if id == item_id));
}

#[test]
fn deleting_district_drops_its_items() {
    let mut state = Dashboard::new();
    let (province_id, district_id) = setup_path(&mut state);
    PropagandaService::new(&mut state)
        .save_item(province_id, district_id, PropagandaItem::new("Panel", "943"))
        .unwrap();

    PropagandaService::new(&mut state)
        .delete_district(province_id, district_id)
        .unwrap();
    assert!(state.propaganda_provinces[0].districts.is_empty());
}

#[test]
fn design_catalog_is_flat_and_upserts_by_id() {
    let mut state = Dashboard::new();
    let mut design = Design::new("Banner principal", "banner");
    let design_id = design.id;
    PropagandaService::new(&mut state).save_design(design.clone()).unwrap();

    design.dimensions = "3m x 2m".to_string();
    PropagandaService::new(&mut state).save_design(design).unwrap();

    assert_eq!(state.designs.len(), 1);
    assert_eq!(state.designs[0].dimensions, "3m x 2m");

    PropagandaService::new(&mut state).delete_design(design_id).unwrap();
    assert!(state.designs.is_empty());
}

#[test]
fn blank_design_title_is_rejected() {
    let mut state = Dashboard::new();
    let err = PropagandaService::new(&mut state)
        .save_design(Design::new("  ", "banner"))
        .unwrap_err();
    assert!(matches!(err, PropagandaServiceError::BlankName));
}
