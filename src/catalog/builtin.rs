use std::collections::HashMap;

use super::model::{Catalog, Category, SoundRecord};

// (id, filename, title, category, description, duration)
const SOUNDS: [(&str, &str, &str, Category, &str, &str); 7] = [
    (
        "1",
        "success_bell.mp3",
        "Success Bell",
        Category::Ui,
        "A cheerful chime indicating a successful action.",
        "0:02",
    ),
    (
        "2",
        "error_buzzer.mp3",
        "Error Buzzer",
        Category::Ui,
        "A flat buzzer sound for validation errors.",
        "0:01",
    ),
    (
        "3",
        "forest_ambience.mp3",
        "Forest Morning",
        Category::Ambience,
        "Light wind through trees with distant birds.",
        "0:15",
    ),
    (
        "4",
        "coin_pickup.wav",
        "Coin Pickup",
        Category::Game,
        "Classic retro 8-bit coin collect sound.",
        "0:01",
    ),
    (
        "5",
        "message_pop.mp3",
        "Message Pop",
        Category::Notification,
        "Soft bubble pop for incoming messages.",
        "0:01",
    ),
    (
        "6",
        "laser_shoot.wav",
        "Laser Blast",
        Category::Game,
        "Futuristic sci-fi laser weapon fire.",
        "0:02",
    ),
    (
        "7",
        "rain_heavy.mp3",
        "Heavy Rain",
        Category::Ambience,
        "Intense rainstorm against a window.",
        "0:30",
    ),
];

// Hosted previews so the built-in library plays without local files.
const DEMO_URLS: [(&str, &str); 7] = [
    (
        "success_bell.mp3",
        "https://assets.mixkit.co/active_storage/sfx/2000/2000-preview.mp3",
    ),
    (
        "error_buzzer.mp3",
        "https://assets.mixkit.co/active_storage/sfx/2003/2003-preview.mp3",
    ),
    (
        "forest_ambience.mp3",
        "https://assets.mixkit.co/active_storage/sfx/249/249-preview.mp3",
    ),
    (
        "coin_pickup.wav",
        "https://assets.mixkit.co/active_storage/sfx/2019/2019-preview.mp3",
    ),
    (
        "message_pop.mp3",
        "https://assets.mixkit.co/active_storage/sfx/2354/2354-preview.mp3",
    ),
    (
        "laser_shoot.wav",
        "https://assets.mixkit.co/active_storage/sfx/1507/1507-preview.mp3",
    ),
    (
        "rain_heavy.mp3",
        "https://assets.mixkit.co/active_storage/sfx/246/246-preview.mp3",
    ),
];

/// The catalog compiled into the binary.
///
/// With `demo_urls` set, every built-in file resolves to a hosted preview
/// instead of `base_path + filename`.
pub fn builtin_catalog(demo_urls: bool) -> Catalog {
    let sounds = SOUNDS
        .iter()
        .map(
            |&(id, filename, title, category, description, duration)| SoundRecord {
                id: id.to_string(),
                filename: filename.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                category,
                duration: duration.to_string(),
            },
        )
        .collect();

    let overrides: HashMap<String, String> = DEMO_URLS
        .iter()
        .map(|&(f, u)| (f.to_string(), u.to_string()))
        .collect();

    // The table above has unique ids.
    let catalog = Catalog::new(sounds, overrides).unwrap_or_default();
    if demo_urls {
        catalog
    } else {
        catalog.without_overrides()
    }
}
