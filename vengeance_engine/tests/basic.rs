use serde_json::{Value, json};
use vengeance_engine as ve;
use ve::*;

fn church_world() -> Value {
    json!({
        "directions": [
            {"name": "up", "opposite": "down"},
            {"name": "in", "opposite": "out"},
            {"name": "west", "opposite": "east"},
        ],
        "rooms": [
            {"name": "A Church", "description": "Tiny place of worship",
             "exits": [{"to": "The Crypt", "direction": "down"}]},
            {"name": "The Crypt", "description": "Dusty tomb filled with empty sarcophagi",
             "exits": [
                 {"to": "A Coffin", "direction": "in", "one_way": true},
                 {"to": "A Cave", "direction": "west"},
             ]},
            {"name": "A Coffin", "description": "A tight squeeze and pitch dark"},
            {"name": "A Cave", "description": "A dark and dingy place"},
        ],
    })
}

fn game_from(data: &Value) -> Game {
    Game::new(build_world(data).unwrap()).unwrap()
}

fn location_named<'a>(world: &'a World, name: &str) -> &'a Location {
    world.location(world.find_location(name).unwrap()).unwrap()
}

#[test]
fn test_lib_version() {
    assert!(!ve::VENGEANCE_VERSION.is_empty());
}

#[test]
fn test_every_room_round_trips() {
    let data = church_world();
    let world = build_world(&data).unwrap();
    for room in data["rooms"].as_array().unwrap() {
        let location = location_named(&world, room["name"].as_str().unwrap());
        assert_eq!(location.description(), room["description"].as_str().unwrap());
    }
}

#[test]
fn test_two_way_exits_have_reverse_edges() {
    let world = build_world(&church_world()).unwrap();
    for (index, location) in world.locations().iter().enumerate() {
        for exit in location.exits() {
            let target = world.location(exit.to).unwrap();
            let back = target
                .exits()
                .iter()
                .any(|e| e.direction == exit.direction.opposite() && e.to.index() == index);
            // the only one-way edge in this world is the crypt's way into the coffin
            let one_way = location.name() == "The Crypt" && target.name() == "A Coffin";
            assert_eq!(back, !one_way, "{} -> {}", location.name(), target.name());
        }
    }
}

#[test]
fn test_one_way_exit() {
    let world = build_world(&json!({
        "directions": [{"name": "up", "opposite": "down"}],
        "rooms": [
            {"name": "Room A", "description": "A",
             "exits": [{"to": "Room B", "direction": "down", "one_way": true}]},
            {"name": "Room B", "description": "B"},
        ],
    }))
    .unwrap();
    assert_eq!(location_named(&world, "Room A").exits().len(), 1);
    assert_eq!(location_named(&world, "Room B").exits().len(), 0);
}

#[test]
fn test_two_way_exit() {
    let world = build_world(&json!({
        "directions": [{"name": "up", "opposite": "down"}],
        "rooms": [
            {"name": "Room A", "description": "A",
             "exits": [{"to": "Room B", "direction": "down"}]},
            {"name": "Room B", "description": "B"},
        ],
    }))
    .unwrap();
    let room_a = location_named(&world, "Room A");
    let room_b = location_named(&world, "Room B");
    assert_eq!(room_a.exits().len(), 1);
    assert_eq!(room_b.exits().len(), 1);
    assert_eq!(world.location(room_a.exits()[0].to).unwrap().name(), "Room B");
    assert_eq!(world.direction_name(room_a.exits()[0].direction), "down");
    assert_eq!(world.direction_name(room_b.exits()[0].direction), "up");
}

#[test]
fn test_directions_have_initials_as_synonyms() {
    let mut game = game_from(&json!({
        "directions": [{"name": "up", "opposite": "down"}],
        "rooms": [
            {"name": "Room A", "description": "A", "exits": [{"to": "Room B", "direction": "down"}]},
            {"name": "Room B", "description": "B"},
        ],
    }));
    let mut view = View::new();
    game.process_input("d", &mut view).unwrap();
    assert_eq!(game.current_location().unwrap().name(), "Room B");
    game.process_input("u", &mut view).unwrap();
    assert_eq!(game.current_location().unwrap().name(), "Room A");
}

#[test]
fn test_shared_prefix_blocks_movement() {
    let mut game = game_from(&json!({
        "directions": [
            {"name": "north", "opposite": "south"},
            {"name": "northeast", "opposite": "southwest"},
        ],
        "rooms": [
            {"name": "Square", "description": "Open", "exits": [
                {"to": "Alley", "direction": "north"},
                {"to": "Market", "direction": "northeast"},
            ]},
            {"name": "Alley", "description": "Narrow"},
            {"name": "Market", "description": "Busy"},
        ],
    }));
    let mut view = View::new();

    assert_eq!(
        game.resolve("n"),
        Resolution::Ambiguous(vec!["north".into(), "northeast".into()])
    );
    game.process_input("n", &mut view).unwrap();
    assert_eq!(game.current_location().unwrap().name(), "Square");
    assert!(game.state().is_running());
}

#[test]
fn test_unique_prefix_moves() {
    let mut game = game_from(&json!({
        "directions": [{"name": "north", "opposite": "south"}],
        "rooms": [
            {"name": "Square", "description": "Open", "exits": [{"to": "Alley", "direction": "north"}]},
            {"name": "Alley", "description": "Narrow"},
        ],
    }));
    let mut view = View::new();

    game.process_input("n", &mut view).unwrap();
    assert_eq!(game.current_location().unwrap().name(), "Alley");
    assert!(game.resolve("n").is_unknown());
    assert!(game.resolve("s").is_travel());
}

#[test]
fn test_quit_after_unrecognized_input() {
    let mut game = game_from(&church_world());
    let mut view = View::new();

    let control = game.process_input("xyzzy", &mut view).unwrap();
    assert_eq!(control, ReplControl::Continue);
    assert!(game.state().is_running());
    assert_eq!(game.current_location().unwrap().name(), "A Church");

    let control = game.process_input("quit", &mut view).unwrap();
    assert_eq!(control, ReplControl::Quit);
    assert_eq!(game.state(), GameState::Terminated);
}

#[test]
fn test_terminated_game_ignores_input() {
    let mut game = game_from(&church_world());
    let mut view = View::new();
    game.process_input("q", &mut view).unwrap();

    let control = game.process_input("d", &mut view).unwrap();
    assert_eq!(control, ReplControl::Quit);
    assert_eq!(game.current_location().unwrap().name(), "A Church");
}

#[test]
fn test_movement_takes_first_declared_exit() {
    let mut game = game_from(&json!({
        "directions": [{"name": "up", "opposite": "down"}],
        "rooms": [
            {"name": "Landing", "description": "Two stairways lead down", "exits": [
                {"to": "Cellar", "direction": "down"},
                {"to": "Vault", "direction": "down", "one_way": true},
            ]},
            {"name": "Cellar", "description": "Damp"},
            {"name": "Vault", "description": "Locked tight"},
        ],
    }));
    assert_eq!(game.current_location().unwrap().exits().len(), 2);

    let mut view = View::new();
    game.process_input("d", &mut view).unwrap();
    assert_eq!(game.current_location().unwrap().name(), "Cellar");
}
