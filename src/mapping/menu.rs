use bigdecimal::BigDecimal;
use validator::Validate;

use crate::dto::{CreateOrUpdateMenu, MenuInfo, MenuItemInfo};
use crate::models::{Menu, MenuItem, NewMenu, UpdateMenu};

fn is_acceptable(payload: &CreateOrUpdateMenu) -> bool {
    payload.validate().is_ok() && payload.price >= BigDecimal::from(0)
}

/// Maps a create payload to an insertable menu; `None` when the payload does
/// not describe a valid menu.
pub fn map_to_menu(payload: &CreateOrUpdateMenu) -> Option<NewMenu> {
    if !is_acceptable(payload) {
        return None;
    }
    Some(NewMenu {
        name: payload.name.clone(),
        image_url: payload.image_url.clone(),
        price: payload.price.clone(),
    })
}

/// Maps an update payload to a changeset; same acceptance rules as
/// [`map_to_menu`].
pub fn map_to_menu_changes(payload: &CreateOrUpdateMenu) -> Option<UpdateMenu> {
    if !is_acceptable(payload) {
        return None;
    }
    Some(UpdateMenu {
        name: Some(payload.name.clone()),
        image_url: Some(payload.image_url.clone()),
        price: Some(payload.price.clone()),
    })
}

/// Projects a menu and its items into the read-only output shape.
pub fn map_to_menu_infos(menu: &Menu, items: &[MenuItem]) -> MenuInfo {
    MenuInfo {
        id: menu.id,
        name: menu.name.clone(),
        image_url: menu.image_url.clone(),
        price: menu.price.clone(),
        items: items
            .iter()
            .map(|item| MenuItemInfo {
                id: item.id,
                recipe_id: item.recipe_id,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: i64) -> CreateOrUpdateMenu {
        CreateOrUpdateMenu {
            name: name.to_string(),
            image_url: "https://example.com/menu.png".to_string(),
            price: BigDecimal::from(price),
        }
    }

    #[test]
    fn valid_payload_maps_to_new_menu() {
        let new_menu = map_to_menu(&payload("Lunch", 25)).unwrap();
        assert_eq!(new_menu.name, "Lunch");
        assert_eq!(new_menu.price, BigDecimal::from(25));
    }

    #[test]
    fn blank_name_maps_to_none() {
        assert!(map_to_menu(&payload("", 25)).is_none());
        assert!(map_to_menu_changes(&payload("", 25)).is_none());
    }

    #[test]
    fn negative_price_maps_to_none() {
        assert!(map_to_menu(&payload("Lunch", -1)).is_none());
    }

    #[test]
    fn changes_set_every_field() {
        let changes = map_to_menu_changes(&payload("Dinner", 40)).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Dinner"));
        assert!(changes.image_url.is_some());
        assert!(changes.price.is_some());
    }

    #[test]
    fn projection_keeps_item_order() {
        let menu = Menu {
            id: 1,
            name: "Lunch".to_string(),
            image_url: String::new(),
            price: BigDecimal::from(25),
        };
        let items = vec![
            MenuItem {
                id: 10,
                menu_id: 1,
                recipe_id: 9,
            },
            MenuItem {
                id: 11,
                menu_id: 1,
                recipe_id: 9,
            },
        ];

        let info = map_to_menu_infos(&menu, &items);
        assert_eq!(info.items.len(), 2);
        assert_eq!(info.items[0], MenuItemInfo { id: 10, recipe_id: 9 });
        assert_eq!(info.items[1], MenuItemInfo { id: 11, recipe_id: 9 });
    }
}
