//! Window manager
//!
//! Owns the surface, the handle table and the backing store. This is the
//! single context object every widget draws through; there is no global
//! state.

use casement_codes::glyphs::{frame, BOOKEND_LEFT, BOOKEND_RIGHT};
use casement_codes::{internal_of, invert, to_internal, INVERSE_BIT};

use super::store::{BackingStore, Claim};
use super::{Align, Column, CursorTarget, Edge, Rect, WindowError, WindowHandle, WindowStatus};
use crate::config::{ManagerConfig, MAX_LINE_LEN, MAX_WINDOWS, SCREEN_COLS, SCREEN_ROWS};
use crate::surface::Surface;

/// One slot of the handle table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowRecord {
    /// Slot holds an open window
    pub in_use: bool,
    /// Bumped on every close of this slot
    pub generation: u16,
    /// Region on screen
    pub rect: Rect,
    /// Glyphs drawn into the window are inverted
    pub inverse: bool,
    /// Outer ring of the region is a frame
    pub bordered: bool,
    /// Saved screen cells
    pub claim: Claim,
}

impl WindowRecord {
    const fn unused(generation: u16) -> Self {
        Self {
            in_use: false,
            generation,
            rect: Rect::new(0, 0, 0, 0),
            inverse: false,
            bordered: false,
            claim: Claim::empty(),
        }
    }

    /// Column offset of the first interior cell
    fn frame(&self) -> usize {
        usize::from(self.bordered)
    }
}

/// Region display manager
pub struct WindowManager {
    surface: Surface,
    records: [WindowRecord; MAX_WINDOWS],
    store: BackingStore,
    /// Virtual cursor used by `position` and `put`
    cursor: (u8, u8),
    config: ManagerConfig,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl WindowManager {
    /// Create and initialize a window manager
    pub fn new(config: ManagerConfig) -> Self {
        let mut wm = Self {
            surface: Surface::new(),
            records: [WindowRecord::unused(0); MAX_WINDOWS],
            store: BackingStore::new(config.close_order),
            cursor: (0, 0),
            config,
        };
        wm.reset();
        wm
    }

    /// Re-initialize: every window is forgotten without restoring what it
    /// covered, the store is zeroed and the screen is filled with the
    /// configured background.
    pub fn reset(&mut self) {
        for record in &mut self.records {
            let generation = if record.in_use {
                record.generation.wrapping_add(1)
            } else {
                record.generation
            };
            *record = WindowRecord::unused(generation);
        }
        self.store.reset();
        self.cursor = (0, 0);
        self.background(self.config.background);
        self.surface.set_cursor(0, 0);
    }

    /// Close every open window, newest first, restoring the screen
    pub fn shutdown(&mut self) {
        while let Some(slot) = self.store.newest() {
            let record = self.records[slot as usize];
            let handle = WindowHandle::new(slot, record.generation);
            if self.close(handle).is_err() {
                break;
            }
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// The display surface
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The display surface, writable
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Virtual cursor (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Bytes of backing store in use
    pub fn store_used(&self) -> usize {
        self.store.used()
    }

    /// Number of open windows
    pub fn open_count(&self) -> usize {
        self.records.iter().filter(|r| r.in_use).count()
    }

    /// Fill the whole screen with a display-code glyph
    pub fn background(&mut self, glyph: u8) {
        self.surface.fill(internal_of(glyph));
    }

    /// Open a window over `rect`
    ///
    /// The first free slot is used. The cells under the region are saved
    /// before the window is drawn.
    pub fn open(
        &mut self,
        rect: Rect,
        inverse: bool,
        bordered: bool,
    ) -> Result<WindowHandle, WindowError> {
        if rect.w == 0
            || rect.h == 0
            || rect.x as usize + rect.w as usize > SCREEN_COLS
            || rect.y as usize + rect.h as usize > SCREEN_ROWS
        {
            return Err(WindowError::OutOfBounds);
        }

        let Some(slot) = self.records.iter().position(|r| !r.in_use) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("open: no free window slot");
            return Err(WindowError::NoFreeSlot);
        };

        let claim = match self.store.claim(slot as u8, rect.area()) {
            Ok(claim) => claim,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "open: store needs {} bytes, {} left",
                    rect.area(),
                    self.store.remaining()
                );
                return Err(e);
            }
        };

        let generation = self.records[slot].generation;
        self.records[slot] = WindowRecord {
            in_use: true,
            generation,
            rect,
            inverse,
            bordered,
            claim,
        };

        let w = rect.w as usize;
        let h = rect.h as usize;
        let mut line = [frame::BLANK; MAX_LINE_LEN];
        for row in 0..h {
            let line = &mut line[..w];
            line.fill(frame::BLANK);
            if bordered {
                if row == 0 || row == h - 1 {
                    line.fill(frame::HBAR);
                    if row == 0 {
                        line[0] = frame::TOP_LEFT;
                        line[w - 1] = frame::TOP_RIGHT;
                    } else {
                        line[0] = frame::BOTTOM_LEFT;
                        line[w - 1] = frame::BOTTOM_RIGHT;
                    }
                } else {
                    line[0] = frame::VBAR;
                    line[w - 1] = frame::VBAR;
                }
            }
            if inverse {
                invert(line);
            }

            let sx = rect.x as usize;
            let sy = rect.y as usize + row;
            let saved = &mut self.store.bytes_mut(claim)[row * w..(row + 1) * w];
            self.surface.read(sx, sy, saved);
            self.surface.write(sx, sy, line);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "open: slot {} at ({}, {}) {}x{}",
            slot,
            rect.x,
            rect.y,
            rect.w,
            rect.h
        );

        Ok(WindowHandle::new(slot as u8, generation))
    }

    /// Close a window and restore the cells it covered
    pub fn close(&mut self, handle: WindowHandle) -> Result<(), WindowError> {
        let slot = self.resolve(handle)?;
        let record = self.records[slot];

        if let Err(e) = self.store.check_release(slot as u8) {
            #[cfg(feature = "defmt")]
            defmt::warn!("close: slot {} is not the newest window", slot);
            return Err(e);
        }

        let w = record.rect.w as usize;
        let saved = self.store.bytes(record.claim);
        for (row, cells) in saved.chunks_exact(w).enumerate() {
            self.surface.write(
                record.rect.x as usize,
                record.rect.y as usize + row,
                cells,
            );
        }

        self.store.release(slot as u8, record.claim)?;
        self.records[slot] = WindowRecord::unused(record.generation.wrapping_add(1));

        #[cfg(feature = "defmt")]
        defmt::debug!("close: slot {}", slot);

        Ok(())
    }

    /// Whether a handle refers to an open window
    pub fn status(&self, handle: WindowHandle) -> WindowStatus {
        match self.resolve(handle) {
            Ok(_) => WindowStatus::InUse,
            Err(_) => WindowStatus::Free,
        }
    }

    /// Record of an open window
    pub fn record(&self, handle: WindowHandle) -> Result<&WindowRecord, WindowError> {
        let slot = self.resolve(handle)?;
        Ok(&self.records[slot])
    }

    /// Move the virtual cursor, and the hardware cursor with it
    pub fn position(&mut self, target: CursorTarget, x: u8, y: u8) -> Result<(), WindowError> {
        self.cursor = match target {
            CursorTarget::Screen => (x, y),
            CursorTarget::Window(handle) => {
                let rect = self.records[self.resolve(handle)?].rect;
                (rect.x.saturating_add(x), rect.y.saturating_add(y))
            }
        };
        self.surface.set_cursor(self.cursor.0, self.cursor.1);
        Ok(())
    }

    /// Write one display-code glyph at the virtual cursor and advance it
    ///
    /// No clipping against the window edge is done.
    pub fn put(&mut self, handle: WindowHandle, glyph: u8) -> Result<(), WindowError> {
        let record = self.records[self.resolve(handle)?];
        let mut code = internal_of(glyph);
        if record.inverse {
            code ^= INVERSE_BIT;
        }
        let (x, y) = self.cursor;
        self.surface.write(x as usize, y as usize, &[code]);
        self.cursor.0 = x.saturating_add(1);
        self.surface.set_cursor(self.cursor.0, self.cursor.1);
        Ok(())
    }

    /// Print display-code text at a window-relative position
    ///
    /// Text is cut at the window's right edge, inside the frame if the
    /// window has one. `inverse` and the window's own inverse flag each
    /// flip the text, so inverse text in an inverse window reads normal.
    pub fn print(
        &mut self,
        handle: WindowHandle,
        col: Column,
        row: u8,
        inverse: bool,
        text: &[u8],
    ) -> Result<(), WindowError> {
        let record = self.records[self.resolve(handle)?];
        let w = record.rect.w as usize;
        let frame = record.frame();

        let room = match col {
            Column::At(x) => w.saturating_sub(x as usize + frame),
            Column::Center => w.saturating_sub(2 * frame),
        };
        let len = text.len().min(room).min(MAX_LINE_LEN);

        let mut line = [0u8; MAX_LINE_LEN];
        let line = &mut line[..len];
        line.copy_from_slice(&text[..len]);
        to_internal(line);
        if inverse {
            invert(line);
        }
        if record.inverse {
            invert(line);
        }

        let dx = match col {
            Column::At(x) => x as usize,
            Column::Center => (w - len) / 2,
        };
        self.surface.write(
            record.rect.x as usize + dx,
            record.rect.y as usize + row as usize,
            line,
        );
        Ok(())
    }

    /// Draw a bracketed label on the top or bottom border
    ///
    /// The bookends stay plain and the label is inverted, unless the window
    /// is inverse, in which case the whole ornament is.
    pub fn ornament(
        &mut self,
        handle: WindowHandle,
        edge: Edge,
        align: Align,
        text: &[u8],
    ) -> Result<(), WindowError> {
        let record = self.records[self.resolve(handle)?];
        let w = record.rect.w as usize;

        // Corners and bookends take four cells
        let body = text.len().min(w.saturating_sub(4));
        let mut line = [0u8; MAX_LINE_LEN];
        line[0] = BOOKEND_LEFT;
        line[1..=body].copy_from_slice(&text[..body]);
        line[body + 1] = BOOKEND_RIGHT;
        let len = (body + 2).min(w);
        let line = &mut line[..len];

        to_internal(line);
        if record.inverse {
            invert(line);
        } else if len > 2 {
            invert(&mut line[1..len - 1]);
        }

        let y = match edge {
            Edge::Top => record.rect.y as usize,
            Edge::Bottom => record.rect.y as usize + record.rect.h as usize - 1,
        };
        let x = record.rect.x as usize
            + match align {
                Align::Left => 1,
                Align::Right => w.saturating_sub(len + 1),
                Align::Center => (w - len) / 2,
            };
        self.surface.write(x, y, line);
        Ok(())
    }

    /// Draw or erase a horizontal divider across an interior row
    pub fn divider(&mut self, handle: WindowHandle, row: u8, on: bool) -> Result<(), WindowError> {
        let record = self.records[self.resolve(handle)?];
        let w = record.rect.w as usize;

        let mut line = [0u8; MAX_LINE_LEN];
        let line = &mut line[..w];
        if on {
            line.fill(frame::HBAR);
            if record.bordered {
                line[0] = frame::TEE_LEFT;
                line[w - 1] = frame::TEE_RIGHT;
            }
        } else {
            line.fill(frame::BLANK);
            if record.bordered {
                line[0] = frame::VBAR;
                line[w - 1] = frame::VBAR;
            }
        }
        if record.inverse {
            invert(line);
        }

        self.surface.write(
            record.rect.x as usize,
            record.rect.y as usize + row as usize,
            line,
        );
        Ok(())
    }

    /// Blank the window interior, leaving the frame
    pub fn clear(&mut self, handle: WindowHandle) -> Result<(), WindowError> {
        let record = self.records[self.resolve(handle)?];
        let frame = record.frame();
        let w = (record.rect.w as usize).saturating_sub(2 * frame);
        let h = (record.rect.h as usize).saturating_sub(2 * frame);

        let mut line = [frame::BLANK; MAX_LINE_LEN];
        let line = &mut line[..w];
        if record.inverse {
            invert(line);
        }

        let x = record.rect.x as usize + frame;
        let y = record.rect.y as usize + frame;
        for row in 0..h {
            self.surface.write(x, y + row, line);
        }
        Ok(())
    }

    /// Slot index of an open window
    fn resolve(&self, handle: WindowHandle) -> Result<usize, WindowError> {
        let slot = handle.index() as usize;
        match self.records.get(slot) {
            Some(r) if r.in_use && r.generation == handle.generation() => Ok(slot),
            _ => Err(WindowError::NotOpen),
        }
    }
}
