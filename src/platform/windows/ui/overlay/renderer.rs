//! Direct2D ripple rendering.
//!
//! High-quality anti-aliased rings with per-pixel alpha transparency via
//! UpdateLayeredWindow.

use log::warn;
use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_PIXEL_FORMAT,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1DCRenderTarget, ID2D1Factory, ID2D1RenderTarget, ID2D1StrokeStyle,
    D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_ELLIPSE, D2D1_RENDER_TARGET_PROPERTIES,
    D2D1_RENDER_TARGET_TYPE_DEFAULT, D2D1_RENDER_TARGET_USAGE_NONE,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS,
};
use windows::Win32::UI::WindowsAndMessaging::{UpdateLayeredWindow, ULW_ALPHA};
use windows_numerics::Vector2;

use crate::animation::RippleFrame;
use crate::model::Rgba;
use crate::overlay::Placement;

fn d2d_color(c: &Rgba) -> D2D1_COLOR_F {
    D2D1_COLOR_F {
        r: c.r as f32,
        g: c.g as f32,
        b: c.b as f32,
        a: c.a as f32,
    }
}

/// Draw one ripple frame into an ARGB bitmap and push it to the layered
/// window at `placement`.
///
/// # Safety
/// `hwnd` must be a live layered window owned by the calling thread.
pub unsafe fn paint_ripple(
    hwnd: HWND,
    factory: &ID2D1Factory,
    placement: Placement,
    frame: &RippleFrame,
) {
    let size = placement.size;
    if size <= 0 {
        return;
    }

    // Create a compatible DC and ARGB bitmap
    let screen_dc = GetDC(None);
    let mem_dc = CreateCompatibleDC(Some(screen_dc));

    let bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: size,
            biHeight: -size, // Top-down
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
    let bitmap = match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) {
        Ok(bitmap) if !bits.is_null() => bitmap,
        _ => {
            warn!("CreateDIBSection failed, ripple frame skipped");
            ReleaseDC(None, screen_dc);
            let _ = DeleteDC(mem_dc);
            return;
        }
    };
    let old_bitmap = SelectObject(mem_dc, bitmap.into());

    let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
        r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
        pixelFormat: D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        },
        dpiX: 96.0,
        dpiY: 96.0,
        usage: D2D1_RENDER_TARGET_USAGE_NONE,
        minLevel: Default::default(),
    };

    let render_target: Result<ID2D1DCRenderTarget, _> = factory.CreateDCRenderTarget(&rt_props);

    match render_target {
        Ok(dc_rt) => {
            let rect = RECT {
                left: 0,
                top: 0,
                right: size,
                bottom: size,
            };
            if dc_rt.BindDC(mem_dc, &rect).is_ok() {
                let rt: ID2D1RenderTarget = dc_rt.into();
                draw_rings(&rt, size as f32, frame);
            }
        }
        Err(e) => warn!("CreateDCRenderTarget failed: {}", e),
    }

    // Apply to window
    let pt_src = POINT { x: 0, y: 0 };
    let win_size = SIZE { cx: size, cy: size };
    let pt_dst = POINT {
        x: placement.left,
        y: placement.top,
    };
    let blend = BLENDFUNCTION {
        BlendOp: 0,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: 1, // AC_SRC_ALPHA
    };

    let _ = UpdateLayeredWindow(
        hwnd,
        Some(screen_dc),
        Some(&pt_dst),
        Some(&win_size),
        Some(mem_dc),
        Some(&pt_src),
        COLORREF(0),
        Some(&blend),
        ULW_ALPHA,
    );

    // Cleanup
    SelectObject(mem_dc, old_bitmap);
    let _ = DeleteObject(bitmap.into());
    let _ = DeleteDC(mem_dc);
    ReleaseDC(None, screen_dc);
}

/// Glow first, ring on top, both centered in a `size` square.
unsafe fn draw_rings(rt: &ID2D1RenderTarget, size: f32, frame: &RippleFrame) {
    rt.BeginDraw();
    rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);

    // Clear to transparent
    rt.Clear(Some(&d2d_color(&Rgba::TRANSPARENT)));

    let center = size / 2.0;
    let radius = frame.radius as f32;
    let ellipse = D2D1_ELLIPSE {
        point: Vector2::new(center, center),
        radiusX: radius,
        radiusY: radius,
    };

    if frame.glow.alpha_byte() > 0 {
        if let Ok(brush) = rt.CreateSolidColorBrush(&d2d_color(&frame.glow), None) {
            rt.DrawEllipse(
                &ellipse,
                &brush,
                frame.glow_width as f32,
                None::<&ID2D1StrokeStyle>,
            );
        }
    }

    // Ring pen width is whole pixels
    let thickness = frame.thickness.trunc() as f32;
    if frame.ring.alpha_byte() > 0 && thickness > 0.0 {
        if let Ok(brush) = rt.CreateSolidColorBrush(&d2d_color(&frame.ring), None) {
            rt.DrawEllipse(&ellipse, &brush, thickness, None::<&ID2D1StrokeStyle>);
        }
    }

    let _ = rt.EndDraw(None, None);
}
