//! End-to-end run of a farmers market day through the public API.

use fairground_market::{Event, FoodTruck, Item, OverstockRule, TieBreak};

struct Menu {
    peach_pie: Item,
    apple_pie: Item,
    peach_raspberry: Item,
    banana: Item,
}

fn menu() -> Menu {
    Menu {
        peach_pie: Item::new("Peach Pie (Slice)", "$3.75"),
        apple_pie: Item::new("Apple Pie (Slice)", "$2.50"),
        peach_raspberry: Item::new("Peach-Raspberry Nice Cream", "$5.30"),
        banana: Item::new("Banana Nice Cream", "$4.25"),
    }
}

fn south_pearl_street(menu: &Menu) -> Event {
    fairground_observability::init();

    let mut rocky = FoodTruck::new("Rocky Mountain Pies");
    rocky.stock(menu.peach_pie.clone(), 35);
    rocky.stock(menu.apple_pie.clone(), 7);

    let mut nom = FoodTruck::new("Ba-Nom-a-Nom");
    nom.stock(menu.banana.clone(), 50);
    nom.stock(menu.peach_raspberry.clone(), 25);

    // Independently constructed items must aggregate with the ones above.
    let mut shack = FoodTruck::new("Palisade Peach Shack");
    shack.stock(Item::new("Peach Pie (Slice)", "$3.75"), 65);
    shack.stock(Item::new("Peach-Raspberry Nice Cream", "$5.30"), 10);

    let mut event = Event::new("South Pearl Street Farmers Market");
    event.add_food_truck(rocky);
    event.add_food_truck(nom);
    event.add_food_truck(shack);
    event
}

#[test]
fn market_day_aggregates() {
    let menu = menu();
    let event = south_pearl_street(&menu);

    assert_eq!(
        event.food_truck_names(),
        vec!["Rocky Mountain Pies", "Ba-Nom-a-Nom", "Palisade Peach Shack"]
    );

    let totals = event.total_inventory();
    let order: Vec<&Item> = totals.keys().copied().collect();
    assert_eq!(
        order,
        vec![&menu.peach_pie, &menu.apple_pie, &menu.banana, &menu.peach_raspberry]
    );

    let peach = totals.get(&menu.peach_pie).unwrap();
    assert_eq!(peach.quantity, 100);
    assert_eq!(peach.food_trucks, event.food_trucks_that_sell(&menu.peach_pie));

    let raspberry = totals.get(&menu.peach_raspberry).unwrap();
    assert_eq!(raspberry.quantity, 35);
    assert_eq!(raspberry.food_trucks.len(), 2);

    assert_eq!(
        event.sorted_item_list(),
        vec![
            "Apple Pie (Slice)",
            "Banana Nice Cream",
            "Peach Pie (Slice)",
            "Peach-Raspberry Nice Cream",
        ]
    );

    assert_eq!(event.overstocked_items(), Some(&menu.peach_pie));
    let all = OverstockRule::default().with_tie_break(TieBreak::AllTied);
    assert_eq!(event.overstocked_items_with(&all), vec![&menu.peach_pie]);
}

#[test]
fn market_day_serializes_trucks_in_stock_order() {
    let menu = menu();
    let event = south_pearl_street(&menu);

    let json = serde_json::to_value(&event.food_trucks()[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Rocky Mountain Pies",
            "inventory": [
                { "item": { "name": "Peach Pie (Slice)", "price": "$3.75" }, "quantity": 35 },
                { "item": { "name": "Apple Pie (Slice)", "price": "$2.50" }, "quantity": 7 }
            ]
        })
    );

    let round_trip: Event = serde_json::from_value(serde_json::to_value(&event).unwrap()).unwrap();
    assert_eq!(round_trip, event);
}
