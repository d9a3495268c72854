//! Terminal renderer. Consumes an immutable [`Snapshot`] and draws one
//! frame: the scene goes into an RGB pixel buffer flushed as half-block
//! cells, then text (HUD, menus, banners) is overlaid as styled cells. No
//! simulation state is touched here.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};

use flappy_term::Rgb;
use flappy_term::consts::{GROUND_HEIGHT, PIPE_GAP, PIPE_WIDTH};
use flappy_term::session::{CELEBRATION_COLORS, MENU_ITEMS, Screen};
use flappy_term::snapshot::Snapshot;

// ── Palette ─────────────────────────────────────────────────────────────────

const SKY_TOP: Rgb = Rgb(135, 206, 235);
const SKY_BOT: Rgb = Rgb(240, 220, 130);
const CLOUD: Rgb = Rgb(255, 255, 255);
const CLOUD_SHADE: Rgb = Rgb(236, 238, 242);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const DIRT: Rgb = Rgb(139, 95, 39);
const DIRT_DARK: Rgb = Rgb(95, 63, 22);
const PIPE_L: Rgb = Rgb(36, 140, 70);
const PIPE_M: Rgb = Rgb(46, 186, 95);
const PIPE_HI: Rgb = Rgb(92, 222, 120);
const PIPE_R: Rgb = Rgb(46, 166, 95);
const CAP_DARK: Rgb = Rgb(30, 110, 60);
const BIRD_BODY: Rgb = Rgb(255, 228, 28);
const BIRD_SHADE: Rgb = Rgb(255, 168, 8);
const BIRD_HI: Rgb = Rgb(255, 245, 120);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(235, 90, 20);
const PANEL: Rgb = Rgb(0, 0, 0);
const PANEL_EDGE: Rgb = Rgb(255, 255, 255);

const MILESTONE_MESSAGES: [&str; 5] = [
    "5 POINTS!",
    "10 POINTS!",
    "20 POINTS!",
    "40 POINTS!",
    "80 POINTS!",
];

fn ct(c: Rgb) -> CColor {
    CColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Pixel buffer with half-block rendering ──────────────────────────────────

struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![SKY_TOP; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SKY_TOP);
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    fn get(&self, x: i32, y: i32) -> Rgb {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize]
        } else {
            SKY_TOP
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    fn fill_disc(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, c: Rgb) {
        let (rx, ry) = (rx.max(1), ry.max(1));
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                let nx = dx as f32 / rx as f32;
                let ny = dy as f32 / ry as f32;
                if nx * nx + ny * ny <= 1.0 {
                    self.set(cx + dx, cy + dy, c);
                }
            }
        }
    }

    /// Flush as `▀` cells: each terminal cell covers two vertically stacked
    /// pixels, foreground = top, background = bottom. Color changes are
    /// tracked to keep the escape-code volume down.
    fn flush(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col as i32, (row * 2) as i32);
                let bot = self.get(col as i32, (row * 2 + 1) as i32);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(out, style::SetBackgroundColor(ct(top)))?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(out, style::SetForegroundColor(ct(top)))?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(out, style::SetBackgroundColor(ct(bot)))?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row < rows - 1 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)?;
        Ok(())
    }
}

// ── Renderer ────────────────────────────────────────────────────────────────

pub struct Renderer {
    buf: PixelBuf,
}

impl Renderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.buf.resize(cols as usize, rows as usize * 2);
    }

    /// Draw one complete frame for the given snapshot.
    pub fn draw(&mut self, out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
        self.draw_sky(snap);
        self.draw_clouds(snap);
        match snap.screen {
            Screen::Menu | Screen::Instructions => {
                self.draw_ground(snap);
            }
            Screen::Playing | Screen::GameOver => {
                self.draw_pipes(snap);
                self.draw_bird(snap);
                self.draw_particles(snap);
                self.draw_ground(snap);
            }
        }

        match snap.screen {
            Screen::Menu => self.draw_panel(snap, 300.0, 200.0),
            Screen::Instructions => self.draw_panel(snap, 400.0, 300.0),
            Screen::GameOver => {
                self.dim();
                self.draw_panel(snap, 300.0, 200.0);
            }
            Screen::Playing => {}
        }

        self.buf.flush(out)?;

        match snap.screen {
            Screen::Menu => self.overlay_menu(out, snap)?,
            Screen::Instructions => self.overlay_instructions(out, snap)?,
            Screen::Playing => self.overlay_hud(out, snap)?,
            Screen::GameOver => self.overlay_game_over(out, snap)?,
        }

        out.flush()
    }

    // World → pixel projection.
    fn px(&self, snap: &Snapshot, wx: f32) -> i32 {
        (wx / snap.world_width * self.buf.w as f32) as i32
    }

    fn py(&self, snap: &Snapshot, wy: f32) -> i32 {
        (wy / snap.world_height * self.buf.h as f32) as i32
    }

    fn sky_color_at(&self, y: usize) -> Rgb {
        let t = (y * 256 / self.buf.h.max(1)) as u16;
        Rgb::lerp(SKY_TOP, SKY_BOT, t.min(256))
    }

    // ── Scene ───────────────────────────────────────────────────────────

    fn draw_sky(&mut self, _snap: &Snapshot) {
        for y in 0..self.buf.h {
            let c = self.sky_color_at(y);
            for x in 0..self.buf.w {
                self.buf.set(x as i32, y as i32, c);
            }
        }
    }

    fn draw_clouds(&mut self, snap: &Snapshot) {
        // Clouds drift 0.5 world units per tick, wrapping from the right
        // edge back to -200.
        let span = snap.world_width + 200.0;
        let offset = ((snap.frame as f32 * 0.5 + 200.0) % span) - 200.0;
        let anchors = [(100.0, 100.0), (300.0, 150.0), (500.0, 80.0), (700.0, 130.0)];

        for (ax, ay) in anchors {
            let rx = self.px(snap, 25.0).max(2);
            let ry = self.py(snap, 25.0).max(1);
            for i in 0..3 {
                let wx = ax + offset + i as f32 * 25.0;
                let cx = self.px(snap, wx);
                let cy = self.py(snap, ay);
                let c = if i == 1 { CLOUD } else { CLOUD_SHADE };
                self.buf.fill_disc(cx, cy, rx, ry, c);
            }
        }
    }

    fn draw_pipes(&mut self, snap: &Snapshot) {
        let cap_reach = 5.0; // world units the cap sticks out per side
        let cap_h = self.py(snap, 20.0).max(2);
        let ground_top = self.py(snap, snap.world_height - GROUND_HEIGHT);

        for pipe in &snap.pipes {
            if pipe.x > snap.world_width || pipe.x + PIPE_WIDTH < 0.0 {
                continue;
            }
            let x0 = self.px(snap, pipe.x);
            let x1 = self.px(snap, pipe.x + PIPE_WIDTH);
            let gap_top = self.py(snap, pipe.gap_y - PIPE_GAP / 2.0);
            let gap_bot = self.py(snap, pipe.gap_y + PIPE_GAP / 2.0);

            // Bodies.
            for x in x0..x1 {
                let c = pipe_shade(x - x0, (x1 - x0).max(1));
                for y in 0..gap_top - cap_h {
                    self.buf.set(x, y, c);
                }
                for y in (gap_bot + cap_h)..ground_top {
                    self.buf.set(x, y, c);
                }
            }

            // Caps, slightly wider than the body.
            let cx0 = self.px(snap, pipe.x - cap_reach);
            let cx1 = self.px(snap, pipe.x + PIPE_WIDTH + cap_reach);
            for x in cx0..cx1 {
                let c = pipe_shade(x - cx0, (cx1 - cx0).max(1));
                for y in (gap_top - cap_h)..gap_top {
                    self.buf.set(x, y, c);
                }
                for y in gap_bot..(gap_bot + cap_h) {
                    self.buf.set(x, y, c);
                }
                self.buf.set(x, gap_top - cap_h, CAP_DARK);
                self.buf.set(x, gap_top - 1, CAP_DARK);
                self.buf.set(x, gap_bot, CAP_DARK);
                self.buf.set(x, gap_bot + cap_h - 1, CAP_DARK);
            }
        }
    }

    fn draw_ground(&mut self, snap: &Snapshot) {
        let gy = self.py(snap, snap.world_height - GROUND_HEIGHT);
        let scroll = (snap.frame as f32 * 2.5) as i32;

        // Grass strip.
        for x in 0..self.buf.w as i32 {
            let alt = ((x + scroll) / 3) % 2 == 0;
            self.buf.set(x, gy, if alt { GRASS } else { GRASS_LIGHT });
            self.buf.set(x, gy + 1, GRASS);
        }
        // Dirt with drifting diagonal striping.
        for y in (gy + 2)..self.buf.h as i32 {
            for x in 0..self.buf.w as i32 {
                let stripe = (x + scroll / 2 + (y - gy) * 2).rem_euclid(12) < 6;
                self.buf.set(x, y, if stripe { DIRT } else { DIRT_DARK });
            }
        }
    }

    fn draw_bird(&mut self, snap: &Snapshot) {
        let cx = self.px(snap, snap.bird.x);
        let cy = self.py(snap, snap.bird.y);
        let bw = self.px(snap, 30.0).max(2);
        let bh = self.py(snap, 30.0).max(2);

        // The terminal can't rotate; nudge the beak/tail line instead.
        let tilt = (snap.bird.rotation / 20.0).clamp(-3.0, 3.0) as i32;

        // Body with a shaded underside and a highlight on top.
        self.buf.fill_disc(cx, cy, bw, bh, BIRD_SHADE);
        self.buf
            .fill_disc(cx, cy - bh / 4, bw - 1, (bh * 3 / 4).max(1), BIRD_BODY);
        self.buf
            .fill_rect(cx - bw / 2, cy - bh + 1, bw, 1.max(bh / 4), BIRD_HI);

        // Wing, flapping on a fixed cadence.
        let wing_off = if snap.frame % 8 < 4 { -1 } else { 1 };
        self.buf.fill_rect(
            cx - bw + 1,
            cy + wing_off + tilt,
            (bw).max(1),
            (bh / 2).max(1),
            BIRD_WING,
        );

        // Eye.
        let ex = cx + bw / 2;
        let ey = cy - bh / 2;
        self.buf.fill_rect(ex, ey, 2, 2, BIRD_EYE);
        self.buf.set(ex + 1, ey + 1, BIRD_PUPIL);

        // Beak.
        self.buf
            .fill_rect(cx + bw, cy - 1 + tilt, (bw / 2).max(2), 2, BIRD_BEAK);

        // Tail.
        self.buf
            .fill_rect(cx - bw - (bw / 2).max(1), cy - 1 - tilt, (bw / 2).max(1), 2, BIRD_WING);
    }

    fn draw_particles(&mut self, snap: &Snapshot) {
        for p in &snap.particles {
            let x = self.px(snap, p.x);
            let y = self.py(snap, p.y);
            let s = ((p.size * p.life) as i32).max(1);
            // Fade by blending toward whatever is already behind.
            let t = (p.life * 256.0) as u16;
            for dy in 0..s {
                for dx in 0..s {
                    let bg = self.buf.get(x + dx, y + dy);
                    self.buf.set(x + dx, y + dy, Rgb::lerp(bg, p.color, t.min(256)));
                }
            }
        }
    }

    /// Darken the whole frame (game-over backdrop).
    fn dim(&mut self) {
        for y in 0..self.buf.h as i32 {
            for x in 0..self.buf.w as i32 {
                let c = self.buf.get(x, y);
                self.buf.set(x, y, Rgb(c.0 / 2, c.1 / 2, c.2 / 2));
            }
        }
    }

    /// Centered panel box, sized in world units.
    fn draw_panel(&mut self, snap: &Snapshot, world_w: f32, world_h: f32) {
        let pw = self.px(snap, world_w);
        let ph = self.py(snap, world_h);
        let x0 = (self.buf.w as i32 - pw) / 2;
        let y0 = (self.buf.h as i32 - ph) / 2;
        self.buf.fill_rect(x0 - 1, y0 - 1, pw + 2, ph + 2, PANEL_EDGE);
        self.buf.fill_rect(x0, y0, pw, ph, PANEL);
    }

    // ── Text overlays ───────────────────────────────────────────────────

    fn text(
        &self,
        out: &mut impl Write,
        col: u16,
        row: u16,
        s: &str,
        fg: CColor,
        bg: CColor,
        bold: bool,
    ) -> io::Result<()> {
        queue!(
            out,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg)
        )?;
        if bold {
            queue!(out, style::SetAttribute(style::Attribute::Bold))?;
        }
        queue!(out, style::Print(s), style::ResetColor)?;
        if bold {
            queue!(out, style::SetAttribute(style::Attribute::Reset))?;
        }
        Ok(())
    }

    fn centered(
        &self,
        out: &mut impl Write,
        row: u16,
        s: &str,
        fg: CColor,
        bg: CColor,
        bold: bool,
    ) -> io::Result<()> {
        let cols = self.buf.w as u16;
        let col = cols.saturating_sub(s.chars().count() as u16) / 2;
        self.text(out, col, row, s, fg, bg, bold)
    }

    fn rows(&self) -> u16 {
        (self.buf.h / 2) as u16
    }

    fn overlay_hud(&self, out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
        let bg0 = ct(self.sky_color_at(0));
        let bg1 = ct(self.sky_color_at(2));
        self.text(
            out,
            1,
            0,
            &format!("Score: {}", snap.score),
            CColor::White,
            bg0,
            true,
        )?;
        self.text(
            out,
            1,
            1,
            &format!("High Score: {}", snap.high_score),
            CColor::White,
            bg1,
            false,
        )?;

        if let Some(cel) = snap.celebration {
            let msg = MILESTONE_MESSAGES[cel.message_index.min(MILESTONE_MESSAGES.len() - 1)];
            let row = self.rows() / 2;
            let cols = self.buf.w as u16;
            let start = cols.saturating_sub(msg.chars().count() as u16 + 4) / 2;
            self.text(out, start, row, "  ", CColor::White, ct(PANEL), false)?;
            for (i, ch) in msg.chars().enumerate() {
                let spin = (snap.frame / 5) as usize;
                let c = CELEBRATION_COLORS[(i + spin) % CELEBRATION_COLORS.len()];
                self.text(
                    out,
                    start + 2 + i as u16,
                    row,
                    &ch.to_string(),
                    ct(c),
                    ct(PANEL),
                    true,
                )?;
            }
            self.text(
                out,
                start + 2 + msg.chars().count() as u16,
                row,
                "  ",
                CColor::White,
                ct(PANEL),
                false,
            )?;
        }
        Ok(())
    }

    fn overlay_menu(&self, out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
        let cy = self.rows() / 2;
        let panel = ct(PANEL);
        self.centered(out, cy.saturating_sub(3), "FLAPPY BIRD", CColor::Yellow, panel, true)?;

        for (i, item) in MENU_ITEMS.iter().enumerate() {
            let row = cy.saturating_sub(1) + i as u16 * 2;
            if snap.menu_selection == i {
                let line = format!("> {item} <");
                self.centered(out, row, &line, ct(Rgb(255, 204, 0)), panel, true)?;
            } else {
                self.centered(out, row, item, CColor::White, panel, false)?;
            }
        }

        if snap.high_score > 0 {
            let line = format!("Best: {}", snap.high_score);
            self.centered(out, cy + 3, &line, CColor::DarkGrey, panel, false)?;
        }
        self.centered(
            out,
            self.rows().saturating_sub(2),
            "W/S or Up/Down to choose, Enter to confirm",
            CColor::DarkGrey,
            ct(DIRT),
            false,
        )
    }

    fn overlay_instructions(&self, out: &mut impl Write, _snap: &Snapshot) -> io::Result<()> {
        let cy = self.rows() / 2;
        let panel = ct(PANEL);
        self.centered(out, cy.saturating_sub(4), "INSTRUCTIONS", CColor::Yellow, panel, true)?;
        let lines = [
            "Press UP ARROW or SPACE to flap",
            "Avoid hitting pipes",
            "Score points by passing pipes",
        ];
        for (i, line) in lines.iter().enumerate() {
            self.centered(out, cy.saturating_sub(2) + i as u16, line, CColor::White, panel, false)?;
        }
        self.centered(
            out,
            cy + 3,
            "Press ENTER to start",
            ct(Rgb(255, 204, 0)),
            panel,
            true,
        )
    }

    fn overlay_game_over(&self, out: &mut impl Write, snap: &Snapshot) -> io::Result<()> {
        let cy = self.rows() / 2;
        let panel = ct(PANEL);
        self.centered(out, cy.saturating_sub(3), "GAME OVER", CColor::Red, panel, true)?;
        self.centered(
            out,
            cy.saturating_sub(1),
            &format!("Score: {}", snap.score),
            CColor::White,
            panel,
            true,
        )?;
        self.centered(
            out,
            cy,
            &format!("High Score: {}", snap.high_score),
            CColor::White,
            panel,
            false,
        )?;
        self.centered(out, cy + 2, "Press R to Restart", CColor::Grey, panel, false)?;
        self.centered(out, cy + 3, "Press Q for Menu", CColor::Grey, panel, false)
    }
}

/// Horizontal shading across a pipe: dark edge, bright band, dark edge.
fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f32 / (total_w - 1) as f32 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}
