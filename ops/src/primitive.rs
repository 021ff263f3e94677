//! Primitive kinds and their wiring traits.
//!
//! Each primitive is built as one generator node fanned out into one or more
//! shape nodes. The traits table below is domain data: it names the generator
//! kind, the shape kind, the generator's output ports, and the shape input
//! port they connect to. Most generators have a single output; the surface
//! cube emits one port per face and the curve square one per edge.

use rand::Rng;
use strew_core::NodeHandle;

/// A primitive created by `create_primitive`: its generator node, its group,
/// and its shape nodes. Never stored by the engine; keeping it is the
/// caller's business.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// The node generating the shapes.
    pub generator: NodeHandle,
    /// The group holding the shapes.
    pub group: NodeHandle,
    /// The shape nodes, one per generator output port.
    pub shapes: Vec<NodeHandle>,
}

/// Static wiring description for one primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveTraits {
    /// Kind tag of the generator node.
    pub generator: &'static str,
    /// Kind tag of every shape node.
    pub shape: &'static str,
    /// Generator output ports, one shape each.
    pub out_ports: &'static [&'static str],
    /// Shape input port receiving the connection.
    pub in_port: &'static str,
}

const fn curve(generator: &'static str, out_ports: &'static [&'static str]) -> PrimitiveTraits {
    PrimitiveTraits {
        generator,
        shape: "curve",
        out_ports,
        in_port: "create",
    }
}

const fn surface(generator: &'static str, out_ports: &'static [&'static str]) -> PrimitiveTraits {
    PrimitiveTraits {
        generator,
        shape: "surface",
        out_ports,
        in_port: "create",
    }
}

const fn mesh(generator: &'static str) -> PrimitiveTraits {
    PrimitiveTraits {
        generator,
        shape: "mesh",
        out_ports: &["outMesh"],
        in_port: "inMesh",
    }
}

/// Enumeration of the primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    CurveCircle,
    CurveSquare,
    SurfaceCone,
    SurfaceCube,
    SurfaceCylinder,
    SurfacePlane,
    SurfaceSphere,
    SurfaceTorus,
    MeshCone,
    MeshCube,
    MeshCylinder,
    MeshHelix,
    MeshMisc,
    MeshPipe,
    MeshPlane,
    MeshPlatonic,
    MeshPrism,
    MeshPyramid,
    MeshSphere,
    MeshTorus,
}

impl PrimitiveKind {
    /// Every kind, in enumeration order.
    pub const ALL: [PrimitiveKind; 20] = [
        PrimitiveKind::CurveCircle,
        PrimitiveKind::CurveSquare,
        PrimitiveKind::SurfaceCone,
        PrimitiveKind::SurfaceCube,
        PrimitiveKind::SurfaceCylinder,
        PrimitiveKind::SurfacePlane,
        PrimitiveKind::SurfaceSphere,
        PrimitiveKind::SurfaceTorus,
        PrimitiveKind::MeshCone,
        PrimitiveKind::MeshCube,
        PrimitiveKind::MeshCylinder,
        PrimitiveKind::MeshHelix,
        PrimitiveKind::MeshMisc,
        PrimitiveKind::MeshPipe,
        PrimitiveKind::MeshPlane,
        PrimitiveKind::MeshPlatonic,
        PrimitiveKind::MeshPrism,
        PrimitiveKind::MeshPyramid,
        PrimitiveKind::MeshSphere,
        PrimitiveKind::MeshTorus,
    ];

    /// Draw a uniformly random kind.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The wiring traits for this kind.
    pub fn traits(self) -> PrimitiveTraits {
        match self {
            PrimitiveKind::CurveCircle => curve("circleGen", &["outCurve"]),
            PrimitiveKind::CurveSquare => curve(
                "squareGen",
                &["outCurve1", "outCurve2", "outCurve3", "outCurve4"],
            ),
            PrimitiveKind::SurfaceCone => surface("coneGen", &["outSurface"]),
            PrimitiveKind::SurfaceCube => surface(
                "cubeGen",
                &[
                    "outSurface",
                    "outSurface1",
                    "outSurface2",
                    "outSurface3",
                    "outSurface4",
                    "outSurface5",
                ],
            ),
            PrimitiveKind::SurfaceCylinder => surface("cylinderGen", &["outSurface"]),
            PrimitiveKind::SurfacePlane => surface("planeGen", &["outSurface"]),
            PrimitiveKind::SurfaceSphere => surface("sphereGen", &["outSurface"]),
            PrimitiveKind::SurfaceTorus => surface("torusGen", &["outSurface"]),
            PrimitiveKind::MeshCone => mesh("meshConeGen"),
            PrimitiveKind::MeshCube => mesh("meshCubeGen"),
            PrimitiveKind::MeshCylinder => mesh("meshCylinderGen"),
            PrimitiveKind::MeshHelix => mesh("meshHelixGen"),
            PrimitiveKind::MeshMisc => mesh("meshMiscGen"),
            PrimitiveKind::MeshPipe => mesh("meshPipeGen"),
            PrimitiveKind::MeshPlane => mesh("meshPlaneGen"),
            PrimitiveKind::MeshPlatonic => mesh("meshPlatonicGen"),
            PrimitiveKind::MeshPrism => mesh("meshPrismGen"),
            PrimitiveKind::MeshPyramid => mesh("meshPyramidGen"),
            PrimitiveKind::MeshSphere => mesh("meshSphereGen"),
            PrimitiveKind::MeshTorus => mesh("meshTorusGen"),
        }
    }

    /// The kind name, as used in raw command sets.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::CurveCircle => "curveCircle",
            PrimitiveKind::CurveSquare => "curveSquare",
            PrimitiveKind::SurfaceCone => "surfaceCone",
            PrimitiveKind::SurfaceCube => "surfaceCube",
            PrimitiveKind::SurfaceCylinder => "surfaceCylinder",
            PrimitiveKind::SurfacePlane => "surfacePlane",
            PrimitiveKind::SurfaceSphere => "surfaceSphere",
            PrimitiveKind::SurfaceTorus => "surfaceTorus",
            PrimitiveKind::MeshCone => "meshCone",
            PrimitiveKind::MeshCube => "meshCube",
            PrimitiveKind::MeshCylinder => "meshCylinder",
            PrimitiveKind::MeshHelix => "meshHelix",
            PrimitiveKind::MeshMisc => "meshMisc",
            PrimitiveKind::MeshPipe => "meshPipe",
            PrimitiveKind::MeshPlane => "meshPlane",
            PrimitiveKind::MeshPlatonic => "meshPlatonic",
            PrimitiveKind::MeshPrism => "meshPrism",
            PrimitiveKind::MeshPyramid => "meshPyramid",
            PrimitiveKind::MeshSphere => "meshSphere",
            PrimitiveKind::MeshTorus => "meshTorus",
        }
    }

    /// Parse a kind name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}
