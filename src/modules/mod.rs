pub mod funtranslations;
pub mod pokeapi;
pub mod pokedex;
