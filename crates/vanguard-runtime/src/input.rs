//! Input state management

use std::collections::{HashMap, HashSet};

/// Keys the arcade game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Digit1,
    Digit2,
    Digit3,
    F,
    H,
    Q,
}

/// Tracks keyboard and pointer input state per frame
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<Key>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<Key>,
    /// Keys released this frame
    keys_just_released: HashSet<Key>,

    /// Current pointer position in window pixels
    pub pointer_position: (f32, f32),
    /// Pointer movement delta this frame
    pointer_delta: (f32, f32),
    /// Primary pointer button held
    pointer_down: bool,
    pointer_just_pressed: bool,
    pointer_just_released: bool,

    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<Key>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            keys_just_released: HashSet::new(),
            pointer_position: (0.0, 0.0),
            pointer_delta: (0.0, 0.0),
            pointer_down: false,
            pointer_just_pressed: false,
            pointer_just_released: false,
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<Key>> {
        let mut map = HashMap::new();
        map.insert("thrust".into(), vec![Key::ArrowUp]);
        map.insert("reverse".into(), vec![Key::ArrowDown]);
        map.insert("turn_left".into(), vec![Key::ArrowLeft]);
        map.insert("turn_right".into(), vec![Key::ArrowRight]);
        map.insert("fire".into(), vec![Key::Space]);
        map.insert("difficulty_easy".into(), vec![Key::Digit1]);
        map.insert("difficulty_normal".into(), vec![Key::Digit2]);
        map.insert("difficulty_hard".into(), vec![Key::Digit3]);
        map.insert("toggle_fullscreen".into(), vec![Key::F]);
        map.insert("toggle_hud".into(), vec![Key::H]);
        map.insert("toggle_sprites".into(), vec![Key::Q]);
        map
    }

    /// Bind an action to one or more keys
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<Key>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: Key) {
        if self.keys_down.remove(&key) {
            self.keys_just_released.insert(key);
        }
    }

    pub fn process_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer_position = (x, y);
        if !self.pointer_down {
            self.pointer_just_pressed = true;
        }
        self.pointer_down = true;
    }

    pub fn process_pointer_up(&mut self) {
        if self.pointer_down {
            self.pointer_just_released = true;
        }
        self.pointer_down = false;
    }

    /// Process pointer movement (cursor position mode)
    pub fn process_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer_delta.0 += x - self.pointer_position.0;
        self.pointer_delta.1 += y - self.pointer_position.1;
        self.pointer_position = (x, y);
    }

    /// Call at end of frame to clear per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.pointer_delta = (0.0, 0.0);
        self.pointer_just_pressed = false;
        self.pointer_just_released = false;
    }

    // --- Query methods ---

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    pub fn is_key_just_released(&self, key: Key) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Is an action currently held? (any bound key is down)
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Was an action just pressed this frame?
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_pressed.contains(k)))
            .unwrap_or(false)
    }

    /// Was an action just released this frame?
    pub fn is_action_just_released(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_released.contains(k)))
            .unwrap_or(false)
    }

    pub fn pointer_delta(&self) -> (f32, f32) {
        self.pointer_delta
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn is_pointer_just_pressed(&self) -> bool {
        self.pointer_just_pressed
    }

    pub fn is_pointer_just_released(&self) -> bool {
        self.pointer_just_released
    }
}
