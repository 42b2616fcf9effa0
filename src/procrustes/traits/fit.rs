//! Procrustes rotational-fit trait.
//!
//! A procrustes fit superimposes one multivariate configuration onto another
//! by rotation (reflections permitted) and optional uniform scaling, after
//! column-centering both. The quality of the superimposition is summarized by
//! the residual sum of squares and the procrustean correlation.

use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Result of a procrustes rotational fit of `y` onto `x`.
#[derive(Debug, Clone)]
pub struct ProcrustesFit<R: Runtime> {
    /// Orthogonal rotation matrix [d, d] applied to the second configuration.
    /// May be improper (include a reflection).
    pub rotation: Tensor<R>,

    /// Uniform scaling factor applied after rotation (1.0 if scaling was
    /// disabled).
    pub scale: f64,

    /// Residual sum of squares after superimposition. Lower is better.
    pub ss: f64,

    /// Procrustean correlation: sum of the singular values of the centered
    /// cross-product, normalized by the configurations' total sums of squares.
    /// Lies in [0, 1]; equals 1 for configurations identical up to rotation,
    /// translation, and scale.
    pub correlation: f64,

    /// Second configuration after centering, rotation, and scaling [n, d],
    /// where d is the common (zero-padded) column count.
    pub yrot: Tensor<R>,
}

/// Algorithmic contract for procrustes rotational fits.
pub trait ProcrustesFitAlgorithms<R: Runtime> {
    /// Fit `y` onto `x` by rotation and optional scaling.
    ///
    /// # Arguments
    ///
    /// * `x` - Target configuration with shape (n, p)
    /// * `y` - Configuration to rotate with shape (n, q)
    /// * `symmetric` - Rescale both centered configurations to unit total sum
    ///   of squares first, making the fit symmetric in its arguments
    /// * `scaling` - Solve for the optimal uniform scaling of `y`
    ///
    /// # Algorithm
    ///
    /// 1. Column-center both configurations (and normalize if `symmetric`)
    /// 2. Zero-pad the narrower one so both have d = max(p, q) columns
    /// 3. SVD of the cross-product XᵀY = U Σ Vᵀ
    /// 4. Rotation A = V Uᵀ, scale c = trace(Σ) / tr(YᵀY) when `scaling`
    /// 5. Residual ss = tr(XᵀX) − trace(Σ)² / tr(YᵀY) (with scaling), or
    ///    tr(XᵀX) + tr(YᵀY) − 2·trace(Σ) (without)
    fn procrustes_fit(
        &self,
        x: &Tensor<R>,
        y: &Tensor<R>,
        symmetric: bool,
        scaling: bool,
    ) -> Result<ProcrustesFit<R>>;
}
