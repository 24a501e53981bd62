//! Depth-sorting render system for the map view
//!
//! Everything on the map (player, event characters, overhead nodes) is
//! collected with a `(z, y)` sort key and drawn back to front (painter's
//! algorithm). Overhead nodes sit at a higher z than characters, so labels
//! and pictures always land on top.
//!
//! Overhead bitmaps live in CPU memory. [`OverheadTextures`] uploads them
//! to GPU textures and re-uploads only when a node's revision changes.

use event_names::game::{GameWorld, MapEvent, Player, CHARACTER_Z, TILE_SIZE};
use event_names::overhead::OverheadNode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

const GRASS_LIGHT: Color = Color::RGB(92, 148, 76);
const GRASS_DARK: Color = Color::RGB(84, 138, 70);
const EVENT_COLOR: Color = Color::RGB(196, 120, 64);
const PLAYER_COLOR: Color = Color::RGB(64, 104, 200);
const OUTLINE_COLOR: Color = Color::RGB(20, 20, 20);

/// Identifies an overhead node: sprite index plus slot (0 = picture, 1 = label)
type NodeKey = (usize, usize);

/// GPU copies of overhead node bitmaps
pub struct OverheadTextures<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<NodeKey, (u64, Texture<'a>)>,
}

impl<'a> OverheadTextures<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        OverheadTextures {
            texture_creator,
            textures: HashMap::new(),
        }
    }

    /// Uploads every node whose content changed since the last sync
    pub fn sync(&mut self, world: &GameWorld) -> Result<(), String> {
        for (sprite_index, sprite) in world.sprites.iter().enumerate() {
            for (slot, node) in sprite.presenter.nodes().enumerate() {
                let key = (sprite_index, slot);
                let up_to_date = self
                    .textures
                    .get(&key)
                    .is_some_and(|(revision, _)| *revision == node.revision());
                if up_to_date {
                    continue;
                }

                match self.upload(node)? {
                    Some(texture) => {
                        self.textures.insert(key, (node.revision(), texture));
                    }
                    None => {
                        self.textures.remove(&key);
                    }
                }
            }
        }
        Ok(())
    }

    fn upload(&self, node: &OverheadNode) -> Result<Option<Texture<'a>>, String> {
        let Some(bitmap) = node.bitmap.as_ref() else {
            return Ok(None);
        };
        if bitmap.width() == 0 || bitmap.height() == 0 || bitmap.is_blank() {
            return Ok(None);
        }

        let mut texture = self
            .texture_creator
            .create_texture_static(PixelFormatEnum::ABGR8888, bitmap.width(), bitmap.height())
            .map_err(|e| e.to_string())?;
        texture
            .update(None, bitmap.pixels(), (bitmap.width() * 4) as usize)
            .map_err(|e| e.to_string())?;
        texture.set_blend_mode(BlendMode::Blend);
        Ok(Some(texture))
    }
}

/// Wrapper enum for the different things drawn on the map
enum Renderable<'w> {
    Player(&'w Player),
    Event(&'w MapEvent),
    Overhead(NodeKey, &'w OverheadNode),
}

impl Renderable<'_> {
    fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &mut OverheadTextures,
    ) -> Result<(), String> {
        match self {
            Renderable::Player(player) => draw_character(canvas, player.x, player.y, PLAYER_COLOR),
            Renderable::Event(event) => draw_character(canvas, event.x, event.y, EVENT_COLOR),
            Renderable::Overhead(key, node) => draw_overhead(canvas, textures, *key, node),
        }
    }
}

/// Draws the whole map with depth sorting (painter's algorithm)
pub fn render_world(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    textures: &mut OverheadTextures,
) -> Result<(), String> {
    draw_ground(canvas, world.width, world.height)?;

    let tile = TILE_SIZE as i32;
    let mut renderables: Vec<((i32, i32), Renderable)> =
        Vec::with_capacity(1 + world.sprites.len() * 3);

    renderables.push(((CHARACTER_Z, world.player.y * tile), Renderable::Player(&world.player)));

    for (sprite_index, sprite) in world.sprites.iter().enumerate() {
        let Some(event) = world.events.get(sprite.event_index) else {
            continue;
        };
        let depth_y = event.y * tile;
        renderables.push(((CHARACTER_Z, depth_y), Renderable::Event(event)));

        for (slot, node) in sprite.presenter.nodes().enumerate() {
            let key = (sprite_index, slot);
            renderables.push(((node.z, depth_y), Renderable::Overhead(key, node)));
        }
    }

    // Stable sort keeps picture-before-label order within one sprite
    renderables.sort_by_key(|(depth, _)| *depth);

    for (_, renderable) in renderables {
        renderable.render(canvas, textures)?;
    }

    Ok(())
}

fn draw_ground(canvas: &mut Canvas<Window>, width: u32, height: u32) -> Result<(), String> {
    for ty in 0..height as i32 {
        for tx in 0..width as i32 {
            let color = if (tx + ty) % 2 == 0 { GRASS_LIGHT } else { GRASS_DARK };
            canvas.set_draw_color(color);
            canvas.fill_rect(tile_rect(tx, ty))?;
        }
    }
    Ok(())
}

fn draw_character(canvas: &mut Canvas<Window>, tx: i32, ty: i32, color: Color) -> Result<(), String> {
    let rect = tile_rect(tx, ty);
    let body = Rect::new(rect.x() + 8, rect.y() + 4, rect.width() - 16, rect.height() - 4);
    canvas.set_draw_color(color);
    canvas.fill_rect(body)?;
    canvas.set_draw_color(OUTLINE_COLOR);
    canvas.draw_rect(body)?;
    Ok(())
}

fn draw_overhead(
    canvas: &mut Canvas<Window>,
    textures: &mut OverheadTextures,
    key: NodeKey,
    node: &OverheadNode,
) -> Result<(), String> {
    if !node.visible || node.opacity <= 0.0 {
        return Ok(());
    }
    let Some(texture) = textures.textures.get_mut(&key).map(|(_, texture)| texture) else {
        return Ok(());
    };

    texture.set_alpha_mod(node.opacity.round().clamp(0.0, 255.0) as u8);
    let dest = Rect::new(
        node.x.round() as i32,
        node.y.round() as i32,
        node.width(),
        node.height(),
    );
    canvas.copy(texture, None, Some(dest))
}

fn tile_rect(tx: i32, ty: i32) -> Rect {
    let tile = TILE_SIZE as i32;
    Rect::new(tx * tile, ty * tile, TILE_SIZE, TILE_SIZE)
}
