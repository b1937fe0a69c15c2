mod context;
mod types;

pub use context::GpuContext;
pub use types::{PhysicalSize, RendererError};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("lost".to_string());
        assert_eq!(err.to_string(), "surface error: lost");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn surface_error_converts() {
        let err: RendererError = wgpu::SurfaceError::Outdated.into();
        assert!(matches!(err, RendererError::SurfaceError(_)));
    }

    #[test]
    fn renderer_error_lifts_into_facet_error() {
        let err: facet_common::FacetError = RendererError::AdapterNotFound.into();
        assert_eq!(err.to_string(), "renderer error: no suitable GPU adapter found");
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize {
            width: 1280,
            height: 720,
        };
        assert!((size.aspect() - 16.0 / 9.0).abs() < 1e-6);
        let empty = PhysicalSize {
            width: 0,
            height: 0,
        };
        assert_eq!(empty.aspect(), 1.0);
    }
}
