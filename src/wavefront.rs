use crate::Collider;

impl Collider {
    /// Writes the mesh as a Wavefront OBJ document on the z = 0 plane.
    ///
    /// The y axis is flipped to OBJ's y-up convention and faces are written
    /// counter-clockwise, so they are front facing in standard viewers.
    pub fn to_obj(&self) -> String {
        let mut lines = vec![
            "# pixelhull collider".to_string(),
            format!(
                "# {} vertices, {} triangles",
                self.vertices.len(),
                self.indices.len()
            ),
        ];

        // Flip y so the mesh is upright in y-up viewers, without printing "-0".
        lines.extend(
            self.vertices
                .iter()
                .map(|v| format!("v {} {} 0", v.x, 0.0 - v.y)),
        );

        // OBJ indices are 1-based
        lines.extend(
            self.indices
                .iter()
                .map(|&(a, b, c)| format!("f {} {} {}", a + 1, c + 1, b + 1)),
        );

        let mut obj = lines.join("\n");
        obj.push('\n');
        obj
    }
}
