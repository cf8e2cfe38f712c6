mod region_dto;

pub use region_dto::{
    DistrictResponseDto, ProvinceResponseDto, RegencyResponseDto, RegionSearchQuery,
    VillageResponseDto,
};
