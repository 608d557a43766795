pub mod japanesejoker;
