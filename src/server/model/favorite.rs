/// The catalog entry a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    /// A person, by ID.
    Person(i32),
    /// A planet, by ID.
    Planet(i32),
    /// A vehicle, by ID.
    Vehicle(i32),
}

impl FavoriteTarget {
    /// The ID of the targeted record.
    pub fn id(&self) -> i32 {
        match self {
            Self::Person(id) | Self::Planet(id) | Self::Vehicle(id) => *id,
        }
    }

    /// Message returned when the targeted record does not exist.
    pub fn missing_message(&self) -> &'static str {
        match self {
            Self::Person(_) => "La persona no existe",
            Self::Planet(_) => "El planeta no existe",
            Self::Vehicle(_) => "El vehiculo no existe",
        }
    }

    /// Message returned once the target was added as a favorite.
    pub fn added_message(&self) -> &'static str {
        match self {
            Self::Person(_) => "Persona favorita añadida con exito",
            Self::Planet(_) => "Planeta favorito añadido con éxito",
            Self::Vehicle(_) => "Vehiculo favorito añadido con exito",
        }
    }
}
